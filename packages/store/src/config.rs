//! # Client configuration: `acct.toml`
//!
//! Defines where the client finds the accounting backend and which identity
//! provider project it authenticates against. The file is optional: a missing
//! or empty file is equivalent to [`AcctConfig::default`], and every value can
//! be overridden from the environment (see `api::config`).
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! url = "http://localhost:8000"
//!
//! [identity]
//! api_key = "AIza..."
//! project_id = "acct-prod"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AcctConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Accounting backend section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Origin of the backend API, without trailing slash.
    #[serde(default = "default_backend_url")]
    pub url: String,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

/// Identity provider (Firebase Authentication) section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Web API key of the Firebase project.
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub project_id: String,
}

impl AcctConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "acct.toml"
    }

    /// Builder method to set the backend origin.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend.url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the identity provider credentials.
    pub fn with_identity(mut self, api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        self.identity.api_key = api_key.into();
        self.identity.project_id = project_id.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.backend.url = config.backend.url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
