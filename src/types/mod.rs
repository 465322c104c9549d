//! Configuration and request types.

pub mod config;
pub mod request;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use request::{
    EncodedBody, HttpMethod, RequestBody, RequestContext, RequestDescriptor, generate_request_id,
};
