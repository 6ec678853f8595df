//! Registration form for new users.

use dioxus::prelude::*;

use crate::session::{use_gateway, use_session};
use crate::state::AuthMode;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let gateway = use_gateway();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match gateway
                .sign_up(&email(), &password(), &confirm_password())
                .await
            {
                Ok(signed_up) => {
                    loading.set(false);
                    session.write().signed_in(signed_up);
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h2 { class: "auth-title", "Registrieren" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
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

                label { r#for: "confirmPassword", class: "field-label", "Passwort bestätigen" }
                input {
                    id: "confirmPassword",
                    class: "field-input",
                    r#type: "password",
                    required: true,
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-success",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Registrieren…" } else { "Registrieren" }
                }
            }

            p {
                class: "auth-switch",
                "Bereits registriert? "
                button {
                    class: "link-button",
                    r#type: "button",
                    disabled: loading(),
                    onclick: move |_| session.write().show(AuthMode::Login),
                    "Anmelden"
                }
            }
        }
    }
}
