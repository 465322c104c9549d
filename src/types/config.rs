//! Client configuration types.
//!
//! This module defines `ClientConfig` and its builder, used to configure the
//! base URL, default headers and token injection of an `HttpClient`.

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix concatenated in front of every request path (no slash normalization).
    pub base_url: String,
    /// Default headers sent with every request.
    pub headers: HashMap<String, String>,
    /// Attach `Authorization: Bearer <token>` from the token store before dispatch.
    pub token_injection_enabled: bool,
    /// Token store key holding the bearer token.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::client::BASE_URL.to_string(),
            headers: HashMap::new(),
            token_injection_enabled: false,
            token_key: defaults::client::TOKEN_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Returns a builder for constructing `ClientConfig`
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Defaults overridden by the environment.
    ///
    /// Supported environment variables:
    /// - `FETCHWIRE_BASE_URL`: base URL
    /// - `FETCHWIRE_TOKEN_INJECTION`: `true`/`1`/`on`/`yes` enables token injection
    /// - `FETCHWIRE_TOKEN_KEY`: token store key
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(defaults::env::BASE_URL) {
            config.base_url = url;
        }
        if let Ok(val) = std::env::var(defaults::env::TOKEN_INJECTION) {
            config.token_injection_enabled = parse_flag(&val);
        }
        if let Ok(key) = std::env::var(defaults::env::TOKEN_KEY) {
            config.token_key = key;
        }
        config
    }
}

fn parse_flag(val: &str) -> bool {
    let v = val.trim().to_lowercase();
    v == "true" || v == "1" || v == "on" || v == "yes"
}

/// Builder for `ClientConfig`
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    headers: HashMap<String, String>,
    token_injection_enabled: Option<bool>,
    token_key: Option<String>,
}

impl ClientConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
    pub fn token_injection(mut self, enabled: bool) -> Self {
        self.token_injection_enabled = Some(enabled);
        self
    }
    pub fn token_key<S: Into<String>>(mut self, key: S) -> Self {
        self.token_key = Some(key.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            headers: self.headers,
            token_injection_enabled: self
                .token_injection_enabled
                .unwrap_or(defaults.token_injection_enabled),
            token_key: self.token_key.unwrap_or(defaults.token_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "/api");
        assert!(config.headers.is_empty());
        assert!(!config.token_injection_enabled);
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn partial_json_config_falls_back_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"token_injection_enabled": true}"#).unwrap();
        assert_eq!(config.base_url, "/api");
        assert!(config.token_injection_enabled);
    }

    #[test]
    fn builder_overrides_only_given_fields() {
        let config = ClientConfig::builder()
            .base_url("https://example.com/v1")
            .header("X-Client", "tests")
            .build();
        assert_eq!(config.base_url, "https://example.com/v1");
        assert_eq!(config.headers.get("X-Client").map(String::as_str), Some("tests"));
        assert!(!config.token_injection_enabled);
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn flag_parsing_accepts_common_truthy_values() {
        for v in ["true", "1", " ON ", "yes"] {
            assert!(parse_flag(v), "{v}");
        }
        for v in ["false", "0", "", "nope"] {
            assert!(!parse_flag(v), "{v}");
        }
    }
}
