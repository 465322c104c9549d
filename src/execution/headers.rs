//! HTTP Headers Utility
//!
//! Builds the header map of a request in a fixed order: default JSON content type
//! (non-GET only), then instance headers, then bearer authorization.

use crate::defaults;
use crate::error::HttpClientError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// HTTP header builder for API requests
#[derive(Debug, Default)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building on top of existing headers
    pub fn from_headers(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(defaults::http::JSON_CONTENT_TYPE),
        );
        self
    }

    /// Drop any content type so the transport can set its own (multipart boundary).
    pub fn without_content_type(mut self) -> Self {
        self.headers.remove(CONTENT_TYPE);
        self
    }

    /// Add multiple custom headers, overriding existing values of the same name
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, HttpClientError> {
        for (key, value) in custom_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                HttpClientError::Configuration(format!("Invalid header name '{key}': {e}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                HttpClientError::Configuration(format!("Invalid header value for '{key}': {e}"))
            })?;
            self.headers.insert(header_name, header_value);
        }
        Ok(self)
    }

    /// Add Bearer token authorization, replacing any previous value
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, HttpClientError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| HttpClientError::Configuration(format!("Invalid token format: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}
