//! Error Handling Module
//!
//! This module provides the error type returned by every `fetchwire` operation:
//! - Core error type (`HttpClientError`)
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use fetchwire::error::HttpClientError;
//!
//! let error = HttpClientError::http(404, "Not found", None);
//! assert_eq!(error.to_string(), "Not found");
//! assert_eq!(error.status(), Some(404));
//! ```

mod conversions;
pub mod types;

pub use types::*;
