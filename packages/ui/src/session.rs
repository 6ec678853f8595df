//! Session context and hooks for the UI.

use dioxus::prelude::*;

use crate::services::{load_config, make_gateway, AppGateway};
use crate::state::SessionState;

/// Get the session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the gateway to the identity provider and the backend.
pub fn use_gateway() -> AppGateway {
    use_context::<AppGateway>()
}

/// Provider component that owns the session.
/// Wrap your app with this component; it restores the stored session on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let gateway = use_context_provider(|| make_gateway(&load_config()));
    let mut state = use_context_provider(|| Signal::new(SessionState::restoring()));

    // Read the stored session once; no network involved.
    let _ = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let restored = gateway.restore().await;
            match &restored {
                Some(session) => tracing::info!(
                    "Restored session for {}",
                    session.email().unwrap_or("unknown account")
                ),
                None => tracing::info!("No stored session"),
            }
            state.set(SessionState::from_restored(restored));
        }
    });

    rsx! {
        {children}
    }
}

/// Forget the session and return to the login form.
pub async fn end_session(gateway: &AppGateway, mut state: Signal<SessionState>) {
    gateway.sign_out().await;
    state.write().signed_out();
}

/// End the session after the backend rejected it and tell the user why.
pub async fn expire_session(gateway: &AppGateway, mut state: Signal<SessionState>, notice: String) {
    tracing::info!("Session ended by backend: {}", notice);
    gateway.sign_out().await;
    state.write().expired(notice);
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Abmelden".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let gateway = use_gateway();
    let state = use_session();

    let onclick = move |_| {
        let gateway = gateway.clone();
        async move {
            end_session(&gateway, state).await;
        }
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: onclick,
            "{label}"
        }
    }
}
