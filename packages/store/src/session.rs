//! # Session store
//!
//! The single source of truth for "is somebody signed in". A [`Session`] is the
//! identity provider's bearer token plus the backend [`Account`] it has been
//! linked to. [`SessionStore`] persists it in any [`KeyValueStore`] and restores
//! it on startup.
//!
//! ## Storage keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"idToken"`) | the raw bearer token |
//! | [`ACCOUNT_KEY`] (`"account"`) | [`Account`] as JSON |
//!
//! ## Failure policy
//!
//! Restoring never fails: an unreachable store, a missing or empty token all
//! mean "logged out". A token with an unreadable account is still a session,
//! just one that has not been linked to a customer yet. There is no expiry
//! check here; expiry is detected when the backend rejects the token.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Key for storing the bearer token.
pub const TOKEN_KEY: &str = "idToken";

/// Key for storing the linked backend account.
pub const ACCOUNT_KEY: &str = "account";

/// Backend identity of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    /// Backend customer the user's receipts belong to. `None` until linked.
    #[serde(default)]
    pub customer_id: Option<i64>,
}

impl Account {
    pub fn new(email: impl Into<String>, customer_id: Option<i64>) -> Self {
        Self {
            email: email.into(),
            customer_id,
        }
    }
}

/// An authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub account: Option<Account>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            account: None,
        }
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    /// Customer id that owns this session's data, if linked.
    pub fn customer_id(&self) -> Option<i64> {
        self.account.as_ref().and_then(|a| a.customer_id)
    }

    pub fn email(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.email.as_str())
    }

    /// Value for an HTTP `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Persists and restores the [`Session`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the session persisted by an earlier run, if any.
    pub async fn restore(&self) -> Option<Session> {
        let token = match self.store.get(TOKEN_KEY).await {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!("Session storage unavailable, starting logged out: {}", e);
                return None;
            }
        };

        let account = match self.store.get(ACCOUNT_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<Account>(&json) {
                Ok(account) => Some(account),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable stored account: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Could not read stored account: {}", e);
                None
            }
        };

        Some(Session { token, account })
    }

    /// Write the session so the next start can restore it.
    pub async fn persist(&self, session: &Session) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, &session.token).await?;
        match &session.account {
            Some(account) => self.set_account(account).await,
            None => self.store.remove(ACCOUNT_KEY).await,
        }
    }

    /// Replace only the stored account, e.g. after linking a customer.
    pub async fn set_account(&self, account: &Account) -> Result<(), StoreError> {
        let json = serde_json::to_string(account)?;
        self.store.set(ACCOUNT_KEY, &json).await
    }

    /// Forget the session (logout or rejected token).
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY).await?;
        self.store.remove(ACCOUNT_KEY).await
    }
}
