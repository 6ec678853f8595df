//! Login form for existing users.

use dioxus::prelude::*;

use crate::session::{use_gateway, use_session};
use crate::state::AuthMode;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let gateway = use_gateway();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let notice = session.read().notice().map(str::to_string);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match gateway.sign_in(&email(), &password()).await {
                Ok(signed_in) => {
                    loading.set(false);
                    session.write().signed_in(signed_in);
                }
                Err(e) => {
                    tracing::info!("Sign-in rejected: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h2 { class: "auth-title", "Anmeldung" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                } else if let Some(text) = notice {
                    div { class: "alert alert-warning", "{text}" }
                }

                label { r#for: "email", class: "field-label", "E-Mail" }
                input {
                    id: "email",
                    class: "field-input",
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "password", class: "field-label", "Passwort" }
                input {
                    id: "password",
                    class: "field-input",
                    r#type: "password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Anmelden…" } else { "Anmelden" }
                }
            }

            p {
                class: "auth-switch",
                "Noch kein Konto? "
                button {
                    class: "link-button",
                    r#type: "button",
                    disabled: loading(),
                    onclick: move |_| session.write().show(AuthMode::Register),
                    "Registrieren"
                }
            }
        }
    }
}
