//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod dashboard;
pub mod state;
pub use state::{AuthMode, SessionState, ViewState};

mod services;
pub use services::{load_config, make_gateway, make_store, AppGateway, PlatformStore};

mod session;
pub use session::{end_session, expire_session, use_gateway, use_session, LogoutButton, SessionProvider};

pub mod views;
pub use views::AppShell;

pub const ACCT_CSS: Asset = asset!("/assets/acct.css");
