//! # API crate: clients for the identity provider and the accounting backend
//!
//! Everything the UI needs to talk to the outside world lives here, behind
//! traits so tests and previews can swap in fakes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`IdentityProvider`](auth::IdentityProvider) trait, the Firebase REST implementation, and [`AuthGateway`] which owns the session lifecycle |
//! | [`backend`] | [`Backend`] trait for receipts, open items, UStVA entries and customers, with the reqwest-backed [`HttpBackend`] |
//! | [`config`] | Environment overrides for [`store::AcctConfig`] |
//! | [`error`] | [`AuthError`] and [`ApiError`] |

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;

pub use auth::{AuthGateway, FirebaseIdentity, IdToken, IdentityProvider};
pub use backend::{find_or_create_customer, upload_for_session, Backend, HttpBackend, ReceiptFile};
pub use error::{ApiError, AuthError, PASSWORD_MISMATCH};

pub use store::{Account, OpenItem, Receipt, Session, UstvaEntry};
