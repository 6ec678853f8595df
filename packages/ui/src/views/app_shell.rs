use dioxus::prelude::*;

use super::{Dashboard, Login, Register};
use crate::session::use_session;
use crate::state::{AuthMode, ViewState};

/// Top-level view controller: picks login, register or dashboard from the
/// session state.
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let state = session();

    if state.loading {
        return rsx! {
            div { class: "app-loading", "Lade…" }
        };
    }

    match state.view() {
        ViewState::Authenticated => rsx! { Dashboard {} },
        ViewState::Unauthenticated { mode: AuthMode::Login } => rsx! { Login {} },
        ViewState::Unauthenticated { mode: AuthMode::Register } => rsx! { Register {} },
    }
}
