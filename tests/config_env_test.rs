//! Environment-driven configuration.
//!
//! Kept in its own test binary with a single test so nothing else in the
//! process reads the variables while they are being changed.

use fetchwire::defaults::env;
use fetchwire::prelude::*;

struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    fn remove(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn test_client_config_from_env() {
    {
        let _g1 = EnvGuard::remove(env::BASE_URL);
        let _g2 = EnvGuard::remove(env::TOKEN_INJECTION);
        let _g3 = EnvGuard::remove(env::TOKEN_KEY);
        assert_eq!(ClientConfig::from_env(), ClientConfig::default());
    }

    {
        let _g1 = EnvGuard::set(env::BASE_URL, "https://api.example.com/v2");
        let _g2 = EnvGuard::set(env::TOKEN_INJECTION, " Yes ");
        let _g3 = EnvGuard::set(env::TOKEN_KEY, "session");

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "https://api.example.com/v2");
        assert!(config.token_injection_enabled);
        assert_eq!(config.token_key, "session");
        assert!(config.headers.is_empty());

        let client = HttpClient::builder().config(config).build();
        assert_eq!(client.base_url(), "https://api.example.com/v2");
        assert!(client.token_injection_enabled());
    }

    {
        let _g1 = EnvGuard::remove(env::BASE_URL);
        let _g2 = EnvGuard::set(env::TOKEN_INJECTION, "off");
        let _g3 = EnvGuard::remove(env::TOKEN_KEY);

        let config = ClientConfig::from_env();
        assert!(!config.token_injection_enabled);
        assert_eq!(config.base_url, "/api");
        assert_eq!(config.token_key, "token");
    }
}
