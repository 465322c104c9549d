//! The request executor.
//!
//! `HttpClient` composes a base URL, default headers and optional bearer token
//! injection around an `HttpTransport`. Every call is a single linear pass:
//! snapshot config, assemble the request, run pre-dispatch hooks, dispatch,
//! normalize the response. There is no retry and no timeout handling.

mod builder;

pub use builder::HttpClientBuilder;

use crate::auth::{TokenInjector, TokenStore};
use crate::error::HttpClientError;
use crate::execution::interceptor::apply_before_send;
use crate::execution::{
    HttpHeaderBuilder, HttpTransport, RequestInterceptor, error_from_response, parse_success_body,
};
use crate::types::{
    ClientConfig, EncodedBody, HttpMethod, RequestBody, RequestContext, RequestDescriptor,
    generate_request_id,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// HTTP/JSON client with a base URL, default headers and optional token injection.
///
/// Configuration setters take `&self`, so one client can be shared behind an
/// `Arc` and reconfigured while calls are in flight. Each call reads the whole
/// configuration once before dispatch; later updates only affect later calls.
pub struct HttpClient {
    config: RwLock<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    token_store: Arc<dyn TokenStore>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl HttpClient {
    /// Create a client over the default `reqwest` transport and an empty in-memory token store.
    pub fn new(config: ClientConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn base_url(&self) -> String {
        self.config().base_url
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.config().headers
    }

    pub fn token_injection_enabled(&self) -> bool {
        self.config().token_injection_enabled
    }

    pub fn set_base_url(&self, url: impl Into<String>) {
        self.update(|config| config.base_url = url.into());
    }

    /// Replace (not merge) the default headers.
    pub fn set_headers(&self, headers: HashMap<String, String>) {
        self.update(|config| config.headers = headers);
    }

    pub fn enable_token_injection(&self, enabled: bool) {
        self.update(|config| config.token_injection_enabled = enabled);
    }

    fn update(&self, f: impl FnOnce(&mut ClientConfig)) {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut config);
    }

    pub async fn get(&self, path: &str) -> Result<serde_json::Value, HttpClientError> {
        self.execute(HttpMethod::Get, path, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<serde_json::Value, HttpClientError> {
        self.execute(HttpMethod::Post, path, Some(body.into())).await
    }

    pub async fn put(
        &self,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<serde_json::Value, HttpClientError> {
        self.execute(HttpMethod::Put, path, Some(body.into())).await
    }

    pub async fn delete(&self, path: &str) -> Result<serde_json::Value, HttpClientError> {
        self.execute(HttpMethod::Delete, path, None).await
    }

    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpClientError> {
        self.execute_as(HttpMethod::Get, path, None).await
    }

    pub async fn post_as<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<T, HttpClientError> {
        self.execute_as(HttpMethod::Post, path, Some(body.into()))
            .await
    }

    pub async fn put_as<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<T, HttpClientError> {
        self.execute_as(HttpMethod::Put, path, Some(body.into()))
            .await
    }

    pub async fn delete_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpClientError> {
        self.execute_as(HttpMethod::Delete, path, None).await
    }

    /// Execute a request and return the JSON body of a successful response.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<serde_json::Value, HttpClientError> {
        self.execute_as(method, path, body).await
    }

    /// Execute a request and deserialize the successful response body into `T`.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<T, HttpClientError> {
        let request = self.build_request(method, path, body)?;
        let ctx = request.context();

        let resp = match self.transport.send(request).await {
            Ok(resp) => resp,
            Err(e) => return Err(self.notify_error(&ctx, e)),
        };
        for interceptor in &self.interceptors {
            interceptor.on_response(&ctx, resp.status);
        }

        if !resp.is_success() {
            return Err(self.notify_error(&ctx, error_from_response(&resp)));
        }
        parse_success_body(&resp).map_err(|e| self.notify_error(&ctx, e))
    }

    /// Assemble the request exactly as it would be dispatched, hooks included.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<RequestDescriptor, HttpClientError> {
        let config = self.config();
        let url = format!("{}{}", config.base_url, path);

        let body = body.filter(|b| !method.is_get() && !b.is_absent());
        let is_form = body.as_ref().is_some_and(RequestBody::is_form);

        let mut headers = HttpHeaderBuilder::new();
        if !method.is_get() {
            headers = headers.with_json_content_type();
        }
        headers = headers.with_custom_headers(&config.headers)?;
        if is_form {
            headers = headers.without_content_type();
        }

        let mut request = RequestDescriptor {
            request_id: generate_request_id(),
            method,
            url,
            headers: headers.build(),
            body: body.map(encode_body).transpose()?,
        };

        if config.token_injection_enabled {
            request = TokenInjector::new(self.token_store.clone(), config.token_key)
                .on_before_send(request)?;
        }
        apply_before_send(&self.interceptors, request)
    }

    fn notify_error(&self, ctx: &RequestContext, error: HttpClientError) -> HttpClientError {
        for interceptor in &self.interceptors {
            interceptor.on_error(ctx, &error);
        }
        error
    }
}

fn encode_body(body: RequestBody) -> Result<EncodedBody, HttpClientError> {
    match body {
        RequestBody::Json(value) => serde_json::to_string(&value)
            .map(EncodedBody::Json)
            .map_err(HttpClientError::Serialization),
        RequestBody::Form(form) => Ok(EncodedBody::Form(form)),
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config())
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}
