//! Bearer token stores.
//!
//! A `TokenStore` is a synchronous key-value lookup for credentials. The client
//! only ever reads from it; writing is up to whoever owns the store.

use crate::defaults::http::LOG_TARGET;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Read-only view of a credential store.
pub trait TokenStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<SecretString>;
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, SecretString>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    pub fn with_token(key: impl Into<String>, token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(key, token);
        store
    }

    pub fn set(&self, key: impl Into<String>, token: impl Into<String>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), SecretString::from(token.into()));
    }

    pub fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<SecretString> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|token| SecretString::from(token.expose_secret().to_owned()))
    }
}

/// Token store persisted as a flat JSON object on disk, e.g. `{"token": "abc123"}`.
///
/// The file is re-read on every lookup so changes made by other processes are
/// picked up. A missing file means "no token"; an unreadable or malformed file
/// is logged and also treated as "no token". Non-string values are ignored.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(target: LOG_TARGET, path = %self.path.display(), err = %e, "failed to read token store");
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(target: LOG_TARGET, path = %self.path.display(), err = %e, "token store is not a JSON object");
                None
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<SecretString> {
        let entries = self.load()?;
        entries
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(|token| SecretString::from(token.to_owned()))
    }
}
