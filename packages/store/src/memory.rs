use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.values
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert_eq!(store.get("idToken").await.unwrap(), None);

        store.set("idToken", "abc").await.unwrap();
        assert_eq!(store.get("idToken").await.unwrap().as_deref(), Some("abc"));

        store.set("idToken", "def").await.unwrap();
        assert_eq!(store.get("idToken").await.unwrap().as_deref(), Some("def"));

        store.remove("idToken").await.unwrap();
        assert_eq!(store.get("idToken").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("account", "{}").await.unwrap();
        assert_eq!(other.get("account").await.unwrap().as_deref(), Some("{}"));
    }
}
