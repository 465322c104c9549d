//! HTTP Interceptor interfaces
//!
//! Interceptors are pre-dispatch hooks: they receive the fully assembled
//! `RequestDescriptor` and return it (possibly modified) before it reaches the
//! transport. They are also told about the response status and about errors.
//! Hooks run in registration order and should avoid expensive work.

use crate::defaults::http::LOG_TARGET;
use crate::error::HttpClientError;
use crate::types::{RequestContext, RequestDescriptor};

/// HTTP interceptor trait
pub trait RequestInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified)
    /// descriptor or an error to short-circuit the request.
    fn on_before_send(
        &self,
        request: RequestDescriptor,
    ) -> Result<RequestDescriptor, HttpClientError> {
        Ok(request)
    }

    /// Called once a response status is known, successful or not.
    fn on_response(&self, _ctx: &RequestContext, _status: u16) {}

    /// Called when the call fails after dispatch.
    fn on_error(&self, _ctx: &RequestContext, _error: &HttpClientError) {}
}

/// A simple logging interceptor backed by `tracing` (no header values or bodies).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl RequestInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        request: RequestDescriptor,
    ) -> Result<RequestDescriptor, HttpClientError> {
        tracing::debug!(
            target: LOG_TARGET,
            request_id = %request.request_id,
            method = %request.method,
            url = %request.url,
            has_body = request.body.is_some(),
            "sending request"
        );
        Ok(request)
    }

    fn on_response(&self, ctx: &RequestContext, status: u16) {
        tracing::debug!(target: LOG_TARGET, request_id = %ctx.request_id, method = %ctx.method, url = %ctx.url, status, "response received");
    }

    fn on_error(&self, ctx: &RequestContext, error: &HttpClientError) {
        tracing::debug!(target: LOG_TARGET, request_id = %ctx.request_id, method = %ctx.method, url = %ctx.url, err = %error, "request error");
    }
}

/// Run `on_before_send` of every interceptor in order.
pub(crate) fn apply_before_send(
    interceptors: &[std::sync::Arc<dyn RequestInterceptor>],
    mut request: RequestDescriptor,
) -> Result<RequestDescriptor, HttpClientError> {
    for interceptor in interceptors {
        request = interceptor.on_before_send(request)?;
    }
    Ok(request)
}
