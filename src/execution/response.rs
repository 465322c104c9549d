//! Response normalization.
//!
//! Turns a `TransportResponse` into either the parsed JSON body or an
//! `HttpClientError` whose message follows a fixed priority:
//! payload `message` field, then status text, then a generic fallback.

use super::transport::TransportResponse;
use crate::defaults::http::UNKNOWN_ERROR_MESSAGE;
use crate::error::HttpClientError;
use serde::de::DeserializeOwned;

/// Build the error for a non-success response.
pub fn error_from_response(resp: &TransportResponse) -> HttpClientError {
    // A body that is not JSON is treated as no payload at all.
    let payload = serde_json::from_slice::<serde_json::Value>(&resp.body).ok();
    let message = payload
        .as_ref()
        .and_then(payload_message)
        .or_else(|| resp.status_text.clone().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
    HttpClientError::http(resp.status, message, payload)
}

fn payload_message(payload: &serde_json::Value) -> Option<String> {
    payload
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a success body; malformed JSON is returned as a raw parse error.
pub fn parse_success_body<T: DeserializeOwned>(resp: &TransportResponse) -> Result<T, HttpClientError> {
    serde_json::from_slice(&resp.body).map_err(HttpClientError::Parse)
}
