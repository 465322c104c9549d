//! Default Configuration Values
//!
//! Centralizes the default values used by `fetchwire` clients.

/// Client default configurations
pub mod client {
    /// Base URL prefix used when none is configured.
    pub const BASE_URL: &str = "/api";

    /// Key under which the bearer token is looked up in a `TokenStore`.
    pub const TOKEN_KEY: &str = "token";
}

/// HTTP protocol defaults
pub mod http {
    /// Content type sent with every non-GET request unless overridden.
    pub const JSON_CONTENT_TYPE: &str = "application/json";

    /// Message used for failed responses that carry neither a `message` field nor a status text.
    pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

    /// `tracing` target used for request lifecycle events.
    pub const LOG_TARGET: &str = "fetchwire::http";
}

/// Environment variable names read by `from_env` helpers
pub mod env {
    pub const BASE_URL: &str = "FETCHWIRE_BASE_URL";
    pub const TOKEN_INJECTION: &str = "FETCHWIRE_TOKEN_INJECTION";
    pub const TOKEN_KEY: &str = "FETCHWIRE_TOKEN_KEY";
    pub const LOG_LEVEL: &str = "FETCHWIRE_LOG_LEVEL";
    pub const LOG_FORMAT: &str = "FETCHWIRE_LOG_FORMAT";
    pub const LOG_FILE: &str = "FETCHWIRE_LOG_FILE";
}
