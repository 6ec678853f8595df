//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in
//! its own file. It is used on desktop to retain the session across app
//! restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── kv/
//!     ├── idToken        # raw token string
//!     └── account        # JSON
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/acct/` |
//! | Linux | `~/.local/share/acct/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\acct\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn kv_dir(&self) -> PathBuf {
        self.base.join("kv")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; strip separators so a key can never
        // escape the kv directory.
        let name: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        self.kv_dir().join(name)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(self.kv_dir())?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
