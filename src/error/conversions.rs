//! Conversions from third-party error types.

use super::HttpClientError;

impl From<reqwest::Error> for HttpClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
