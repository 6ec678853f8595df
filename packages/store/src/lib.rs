pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod session;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::AcctConfig;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use models::{Customer, NewCustomer, OpenItem, Receipt, UstvaEntry};
pub use session::{Account, Session, SessionStore};
