//! # Browser `localStorage` store: web persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes the window's `localStorage` through
//! `web-sys`, so the session token survives page reloads exactly like the
//! `localStorage.setItem('idToken', ...)` call of a plain browser app.
//!
//! ## Namespacing
//!
//! Keys are prefixed with `"acct:"` by default so the client never collides
//! with other scripts on the same origin.
//!
//! ## Error handling
//!
//! Private browsing modes and sandboxed iframes may deny access to
//! `localStorage`. That surfaces as [`StoreError::Unavailable`]; the session
//! layer turns it into "no session".

use crate::error::StoreError;
use crate::kv::KeyValueStore;

const DEFAULT_PREFIX: &str = "acct:";

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    prefix: String,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage {
    /// Create a store using the default `"acct:"` key prefix.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(&self.full_key(key))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&self.full_key(key), value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(&self.full_key(key))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
