//! HTTP transport abstraction.
//!
//! The transport is the "fetch" of this crate: it takes a fully assembled
//! `RequestDescriptor` and returns the raw response. `ReqwestTransport` is the
//! default; tests and embedders can inject their own implementation to observe
//! the final URL/headers/body or return a synthetic response.

use crate::error::HttpClientError;
use crate::types::{EncodedBody, RequestDescriptor};
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    /// Reason phrase of the status line, when known.
    ///
    /// `ReqwestTransport` fills this with the standard reason for the status
    /// code (`StatusCode::canonical_reason`), not the phrase the server sent.
    pub status_text: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Custom HTTP transport.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse, HttpClientError>;
}

/// Transport backed by a `reqwest::Client`.
///
/// Connection pooling and reuse are whatever the wrapped client does.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse, HttpClientError> {
        let mut rb = self
            .client
            .request(request.method.into(), &request.url)
            .headers(request.headers);
        rb = match request.body {
            Some(EncodedBody::Json(text)) => rb.body(text),
            Some(EncodedBody::Form(form)) => rb.multipart(form),
            None => rb,
        };

        let resp = rb.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_string),
            headers,
            body,
        })
    }
}
