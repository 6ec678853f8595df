use api::{upload_for_session, Receipt, ReceiptFile};
use dioxus::prelude::*;

use crate::dashboard::{can_submit_upload, upload_error_message, UPLOAD_OK};
use crate::icons::FaFileArrowUp;
use crate::session::{use_gateway, use_session};
use crate::Icon;

/// Upload form for a single receipt (PDF or image).
///
/// The receipt is filed under the signed-in user's customer. A rejected token
/// is reported through `on_unauthorized` so the dashboard can end the session.
#[component]
pub fn ReceiptUpload(on_uploaded: EventHandler<Receipt>, on_unauthorized: EventHandler<()>) -> Element {
    let gateway = use_gateway();
    let session = use_session();
    let mut file = use_signal(|| Option::<ReceiptFile>::None);
    let mut uploading = use_signal(|| false);
    let mut message = use_signal(String::new);

    let handle_pick = move |evt: FormEvent| async move {
        let Some(picked) = evt.files().into_iter().next() else {
            file.set(None);
            return;
        };
        match picked.read_bytes().await {
            Ok(bytes) => {
                file.set(Some(ReceiptFile::new(
                    picked.name(),
                    picked.content_type(),
                    bytes.to_vec(),
                )));
            }
            Err(e) => {
                tracing::warn!("Could not read {}: {}", picked.name(), e);
                file.set(None);
                message.set("Datei konnte nicht gelesen werden".to_string());
            }
        }
    };

    let handle_upload = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            if !can_submit_upload(Option::as_ref(&*file.read()), uploading()) {
                return;
            }
            let (Some(picked), Some(current)) = (file(), session.peek().session().cloned()) else {
                return;
            };

            uploading.set(true);
            match upload_for_session(gateway.backend(), &current, picked).await {
                Ok(receipt) => {
                    message.set(UPLOAD_OK.to_string());
                    on_uploaded.call(receipt);
                }
                Err(e) => {
                    tracing::warn!("Upload failed: {}", e);
                    message.set(upload_error_message(&e));
                    if e.is_unauthorized() {
                        on_unauthorized.call(());
                    }
                }
            }
            uploading.set(false);
        });
    };

    let submit_enabled = can_submit_upload(Option::as_ref(&*file.read()), uploading());

    rsx! {
        div {
            class: "panel",
            h2 {
                class: "panel-title",
                Icon { icon: FaFileArrowUp, width: 14, height: 14 }
                "Beleg hochladen"
            }
            form {
                onsubmit: handle_upload,
                class: "upload-form",
                input {
                    r#type: "file",
                    accept: "application/pdf, image/*",
                    class: "upload-input",
                    onchange: handle_pick,
                }
                button {
                    class: "btn btn-success",
                    r#type: "submit",
                    disabled: !submit_enabled,
                    if uploading() { "Lade..." } else { "Hochladen" }
                }
            }
            if !message().is_empty() {
                p { class: "panel-message", "{message}" }
            }
        }
    }
}
