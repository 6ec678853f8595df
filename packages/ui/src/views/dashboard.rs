//! Dashboard: receipts on the left, VAT filings and open items on the right.

use api::{ApiError, Backend};
use dioxus::prelude::*;

use super::{OpenItems, ReceiptList, ReceiptUpload, UstvaStatus};
use crate::dashboard::{session_end_notice, DashboardData};
use crate::session::{expire_session, use_gateway, use_session, LogoutButton};

/// Dashboard page component. Fetches all three lists for the signed-in
/// customer on mount.
#[component]
pub fn Dashboard() -> Element {
    let gateway = use_gateway();
    let mut session = use_session();
    let mut data = use_signal(DashboardData::default);
    let mut notice = use_signal(|| Option::<String>::None);

    let loader_gateway = gateway.clone();
    let _loader = use_resource(move || {
        let gateway = loader_gateway.clone();
        async move {
            let Some(mut current) = session.peek().session().cloned() else {
                return;
            };

            if current.customer_id().is_none() {
                match gateway.relink(&current).await {
                    Ok(linked) => {
                        session.write().relinked(linked.clone());
                        current = linked;
                    }
                    Err(e) => {
                        tracing::warn!("Account link failed: {}", e);
                        match session_end_notice(&e) {
                            Some(text) => expire_session(&gateway, session, text).await,
                            None => notice.set(Some(e.to_string())),
                        }
                        return;
                    }
                }
            }
            let Some(customer_id) = current.customer_id() else {
                return;
            };

            let backend = gateway.backend();
            let receipts = backend.list_receipts(&current, customer_id).await;
            let open_items = backend.list_open_items(&current, customer_id).await;
            let ustva = backend.list_ustva(&current, customer_id).await;

            let rejected = [
                receipts.as_ref().err(),
                open_items.as_ref().err(),
                ustva.as_ref().err(),
            ]
            .into_iter()
            .flatten()
            .find(|e| e.is_unauthorized())
            .and_then(session_end_notice);
            if let Some(text) = rejected {
                expire_session(&gateway, session, text).await;
                return;
            }

            let mut loaded = data.write();
            loaded.load_receipts(receipts);
            loaded.open_items.load(open_items);
            loaded.ustva.load(ustva);
        }
    });

    let unauthorized_gateway = gateway.clone();
    let on_unauthorized = move |_| {
        let gateway = unauthorized_gateway.clone();
        async move {
            let text = ApiError::Unauthorized.to_string();
            expire_session(&gateway, session, text).await;
        }
    };

    let current = data();
    let email = session().session().and_then(|s| s.email().map(str::to_string));

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-header",
                h1 { class: "dashboard-title", "Dashboard" }
                div {
                    class: "dashboard-user",
                    if let Some(email) = email {
                        span { "{email}" }
                    }
                    LogoutButton { class: "btn btn-secondary" }
                }
            }
            if let Some(text) = notice() {
                div { class: "alert alert-error", "{text}" }
            }
            div {
                class: "dashboard-grid",
                div {
                    class: "dashboard-column",
                    ReceiptUpload {
                        on_uploaded: move |receipt| data.write().append_receipt(receipt),
                        on_unauthorized: on_unauthorized,
                    }
                    ReceiptList {
                        receipts: current.receipts.items.clone(),
                        error: current.receipts.error.clone(),
                    }
                }
                div {
                    class: "dashboard-column",
                    UstvaStatus {
                        entries: current.ustva.items.clone(),
                        error: current.ustva.error.clone(),
                    }
                    OpenItems {
                        items: current.open_items.items.clone(),
                        error: current.open_items.error.clone(),
                    }
                }
            }
        }
    }
}
