//! Client configuration from environment variables.
//!
//! Native builds read the process environment at startup (after loading a
//! `.env` file if present). WASM builds have no process environment, so the
//! same variables are captured at compile time instead.

use store::AcctConfig;

pub const BACKEND_URL_VAR: &str = "ACCT_BACKEND_URL";
pub const FIREBASE_API_KEY_VAR: &str = "ACCT_FIREBASE_API_KEY";
pub const FIREBASE_PROJECT_ID_VAR: &str = "ACCT_FIREBASE_PROJECT_ID";

/// Overlay environment settings on top of `base`.
pub fn with_env(base: AcctConfig) -> AcctConfig {
    #[cfg(not(target_arch = "wasm32"))]
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
        }
    }
    with_vars(base, lookup)
}

/// Overlay the settings `source` yields on top of `base`. Blank values are
/// treated as unset.
pub fn with_vars(base: AcctConfig, source: impl Fn(&str) -> Option<String>) -> AcctConfig {
    let var = |name: &str| source(name).filter(|v| !v.trim().is_empty());

    let mut config = base;
    if let Some(url) = var(BACKEND_URL_VAR) {
        config = config.with_backend_url(url);
    }
    if let Some(key) = var(FIREBASE_API_KEY_VAR) {
        config.identity.api_key = key;
    }
    if let Some(project) = var(FIREBASE_PROJECT_ID_VAR) {
        config.identity.project_id = project;
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup(var: &str) -> Option<String> {
    let value = match var {
        BACKEND_URL_VAR => option_env!("ACCT_BACKEND_URL"),
        FIREBASE_API_KEY_VAR => option_env!("ACCT_FIREBASE_API_KEY"),
        FIREBASE_PROJECT_ID_VAR => option_env!("ACCT_FIREBASE_PROJECT_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_vars_override_file_values() {
        let base = AcctConfig::default().with_identity("file-key", "file-project");
        let config = with_vars(
            base,
            vars(&[
                (BACKEND_URL_VAR, "https://acct-backend.example.de/"),
                (FIREBASE_API_KEY_VAR, "env-key"),
            ]),
        );

        assert_eq!(config.backend.url, "https://acct-backend.example.de");
        assert_eq!(config.identity.api_key, "env-key");
        assert_eq!(config.identity.project_id, "file-project");
    }

    #[test]
    fn test_blank_vars_are_ignored() {
        let base = AcctConfig::default().with_identity("file-key", "file-project");
        let config = with_vars(base.clone(), vars(&[(FIREBASE_API_KEY_VAR, "  ")]));

        assert_eq!(config, base);
    }

    #[test]
    fn test_env_overlay_reads_process_environment() {
        std::env::set_var(FIREBASE_PROJECT_ID_VAR, "env-project");

        let config = with_env(AcctConfig::default());

        assert_eq!(config.identity.project_id, "env-project");
    }
}
