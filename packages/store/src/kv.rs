//! # Durable key-value storage
//!
//! [`KeyValueStore`] is the seam between the session logic and whatever the
//! platform offers for persistence: browser `localStorage` on the web
//! ([`crate::LocalStorage`]), one file per key on desktop
//! ([`crate::FileStore`]), or a plain map in tests ([`crate::MemoryStore`]).
//!
//! Values are strings. Reads of a key that was never written return
//! `Ok(None)`; an `Err` means the backend itself could not be reached.

use crate::error::StoreError;

/// Async trait for storing and retrieving string values by key.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
