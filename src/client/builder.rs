//! Builder for `HttpClient`.

use super::HttpClient;
use crate::auth::{MemoryTokenStore, TokenStore};
use crate::execution::{HttpTransport, LoggingInterceptor, ReqwestTransport, RequestInterceptor};
use crate::types::ClientConfig;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Builder for `HttpClient`
///
/// Unset parts fall back to: default `ClientConfig`, a fresh `reqwest::Client`,
/// an empty `MemoryTokenStore`, and no extra interceptors.
#[derive(Default)]
pub struct HttpClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    token_store: Option<Arc<dyn TokenStore>>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.config.headers.extend(headers);
        self
    }

    pub fn token_injection(mut self, enabled: bool) -> Self {
        self.config.token_injection_enabled = enabled;
        self
    }

    pub fn token_key(mut self, key: impl Into<String>) -> Self {
        self.config.token_key = key.into();
        self
    }

    /// Use a preconfigured `reqwest::Client` for the default transport.
    ///
    /// Ignored when a custom transport is set.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Add an interceptor; they run after token injection, in insertion order.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Shorthand for adding a `LoggingInterceptor`.
    pub fn with_logging(self) -> Self {
        self.with_interceptor(Arc::new(LoggingInterceptor))
    }

    pub fn build(self) -> HttpClient {
        let transport = self.transport.unwrap_or_else(|| {
            Arc::new(ReqwestTransport::new(self.http_client.unwrap_or_default()))
        });
        HttpClient {
            config: RwLock::new(self.config),
            transport,
            token_store: self
                .token_store
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            interceptors: self.interceptors,
        }
    }
}
