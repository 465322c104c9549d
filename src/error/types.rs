//! Core error types.

use thiserror::Error;

/// Errors surfaced by `HttpClient` calls.
#[derive(Error, Debug)]
pub enum HttpClientError {
    /// The server answered with a non-success status.
    ///
    /// The display form is exactly the normalized message so callers can show it as-is.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Error body, when it was valid JSON.
        payload: Option<serde_json::Value>,
    },

    /// A success response body was not valid JSON (or did not match the requested type).
    #[error(transparent)]
    Parse(serde_json::Error),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(serde_json::Error),

    /// The underlying transport failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A header name or value could not be used.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Tracing subscriber initialization failed.
    #[error("Telemetry initialization error: {0}")]
    Telemetry(String),
}

impl HttpClientError {
    /// Create an HTTP status error.
    pub fn http(
        status: u16,
        message: impl Into<String>,
        payload: Option<serde_json::Value>,
    ) -> Self {
        Self::Http {
            status,
            message: message.into(),
            payload,
        }
    }

    /// Status code of an HTTP failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed JSON error body of an HTTP failure, if any.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    pub fn is_http_error(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_message_only() {
        let err = HttpClientError::http(404, "Not found", Some(serde_json::json!({"message": "Not found"})));
        assert_eq!(err.to_string(), "Not found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_http_error());
        assert_eq!(err.payload().unwrap()["message"], "Not found");
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = HttpClientError::Parse(parse);
        assert!(err.is_parse_error());
        assert_eq!(err.status(), None);
        assert!(err.payload().is_none());
    }
}
