//! Platform wiring for the client services.
//!
//! Picks the durable store for the current platform and builds the
//! [`AppGateway`] from the loaded configuration:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Desktop** (native): files under `<data_dir>/acct/` via [`store::FileStore`]

use std::path::PathBuf;

use store::AcctConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// The gateway type every view receives through context.
pub type AppGateway = api::AuthGateway<api::FirebaseIdentity, api::HttpBackend, PlatformStore>;

/// Platform data directory for this app (`<data_dir>/acct`).
fn data_dir() -> PathBuf {
    #[cfg(not(target_arch = "wasm32"))]
    let base = dirs::data_dir();
    #[cfg(target_arch = "wasm32")]
    let base: Option<PathBuf> = None;

    base.unwrap_or_else(|| PathBuf::from(".")).join("acct")
}

/// Create the platform-appropriate key-value store.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileStore::new(data_dir())
    }
}

/// Defaults, then `acct.toml` from the data directory, then the environment.
pub fn load_config() -> AcctConfig {
    let path = data_dir().join(AcctConfig::filename());
    let file_config = match std::fs::read_to_string(&path) {
        Ok(text) => AcctConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            AcctConfig::default()
        }),
        Err(_) => AcctConfig::default(),
    };
    api::config::with_env(file_config)
}

pub fn make_gateway(config: &AcctConfig) -> AppGateway {
    tracing::info!("Using backend {}", config.backend.url);
    api::AuthGateway::new(
        api::FirebaseIdentity::new(&config.identity),
        api::HttpBackend::new(&config.backend.url),
        make_store(),
    )
}
