//! # fetchwire - a small HTTP/JSON client
//!
//! `fetchwire` wraps a fetch-style transport with a base URL, default headers
//! and optional bearer token injection, and exposes `get`/`post`/`put`/`delete`.
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use fetchwire::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryTokenStore::with_token("token", "abc123"));
//!     let client = secured_client(store);
//!     client.set_base_url("https://example.com/api");
//!
//!     let user = client.get("/users/1").await?;
//!     let created = client.post("/users", serde_json::json!({"name": "ada"})).await?;
//!     println!("{user} {created}");
//!     Ok(())
//! }
//! ```
//!
//! Failed responses surface as `HttpClientError::Http`, whose message is the
//! response's JSON `message` field, else the status text, else
//! `"Unknown error occurred"`.

pub mod auth;
pub mod client;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod telemetry;
pub mod types;

use std::sync::Arc;

pub use auth::{FileTokenStore, MemoryTokenStore, TokenInjector, TokenStore};
pub use client::{HttpClient, HttpClientBuilder};
pub use error::HttpClientError;
pub use execution::{
    HttpTransport, LoggingInterceptor, RequestInterceptor, ReqwestTransport, TransportResponse,
};
pub use types::{ClientConfig, HttpMethod, RequestBody, RequestDescriptor};

/// Plain client: base URL `/api`, no default headers, no token injection.
pub fn default_client() -> HttpClient {
    HttpClient::new(ClientConfig::default())
}

/// Same as [`default_client`] with token injection enabled, reading the
/// `token` entry of `store`.
pub fn secured_client(store: Arc<dyn TokenStore>) -> HttpClient {
    HttpClient::builder()
        .token_injection(true)
        .with_token_store(store)
        .build()
}

/// Commonly used types
pub mod prelude {
    pub use crate::auth::{FileTokenStore, MemoryTokenStore, TokenStore};
    pub use crate::client::HttpClient;
    pub use crate::error::HttpClientError;
    pub use crate::types::{ClientConfig, HttpMethod, RequestBody};
    pub use crate::{default_client, secured_client};
}
