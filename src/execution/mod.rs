//! HTTP execution primitives
//!
//! This module contains the pieces `HttpClient` composes for every call:
//! - Header assembly
//! - Pre-dispatch interceptors
//! - The transport seam
//! - Response/error normalization

pub mod headers;
pub mod interceptor;
pub mod response;
pub mod transport;

// Re-export main types
pub use headers::HttpHeaderBuilder;
pub use interceptor::{LoggingInterceptor, RequestInterceptor};
pub use response::{error_from_response, parse_success_body};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
