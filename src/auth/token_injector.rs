//! Bearer token injection hook.

use super::TokenStore;
use crate::defaults::http::LOG_TARGET;
use crate::error::HttpClientError;
use crate::execution::{HttpHeaderBuilder, RequestInterceptor};
use crate::types::RequestDescriptor;
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Attaches `Authorization: Bearer <token>` read from a `TokenStore`.
///
/// A missing or blank token is not an error: a warning is emitted and the
/// request goes out without authorization.
#[derive(Clone)]
pub struct TokenInjector {
    store: Arc<dyn TokenStore>,
    key: String,
}

impl TokenInjector {
    pub fn new(store: Arc<dyn TokenStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Debug for TokenInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenInjector")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl RequestInterceptor for TokenInjector {
    fn on_before_send(
        &self,
        mut request: RequestDescriptor,
    ) -> Result<RequestDescriptor, HttpClientError> {
        let token = self
            .store
            .get(&self.key)
            .filter(|t| !t.expose_secret().trim().is_empty());
        let Some(token) = token else {
            tracing::warn!(target: LOG_TARGET, request_id = %request.request_id, url = %request.url, "No token available for Authorization header.");
            return Ok(request);
        };

        request.headers = HttpHeaderBuilder::from_headers(request.headers)
            .with_bearer_auth(token.expose_secret())?
            .build();
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use crate::types::{HttpMethod, generate_request_id};
    use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

    fn descriptor(headers: HeaderMap) -> RequestDescriptor {
        RequestDescriptor {
            request_id: generate_request_id(),
            method: HttpMethod::Get,
            url: "/api/me".to_string(),
            headers,
            body: None,
        }
    }

    #[test]
    fn sets_bearer_header_over_existing_value() {
        let store = Arc::new(MemoryTokenStore::with_token("token", "abc123"));
        let injector = TokenInjector::new(store, "token");

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));
        let out = injector.on_before_send(descriptor(headers)).unwrap();

        assert_eq!(out.headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn blank_token_leaves_headers_untouched() {
        let store = Arc::new(MemoryTokenStore::with_token("token", "   "));
        let injector = TokenInjector::new(store, "token");

        let out = injector.on_before_send(descriptor(HeaderMap::new())).unwrap();
        assert!(out.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn reads_the_configured_key() {
        let store = Arc::new(MemoryTokenStore::with_token("session", "s3cr3t"));

        let out = TokenInjector::new(store.clone(), "session")
            .on_before_send(descriptor(HeaderMap::new()))
            .unwrap();
        assert_eq!(out.headers.get(AUTHORIZATION).unwrap(), "Bearer s3cr3t");

        let out = TokenInjector::new(store, "token")
            .on_before_send(descriptor(HeaderMap::new()))
            .unwrap();
        assert!(out.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let store = Arc::new(MemoryTokenStore::with_token("token", "abc\n123"));
        let err = TokenInjector::new(store, "token")
            .on_before_send(descriptor(HeaderMap::new()))
            .unwrap_err();
        assert!(matches!(err, HttpClientError::Configuration(_)));
    }
}
