use api::OpenItem;
use dioxus::prelude::*;

use crate::dashboard::open_item_cells;
use crate::icons::FaListCheck;
use crate::Icon;

/// Table of outstanding items with their paid status.
#[component]
pub fn OpenItems(items: Vec<OpenItem>, #[props(!optional)] error: Option<String>) -> Element {
    rsx! {
        div {
            class: "panel",
            h2 {
                class: "panel-title",
                Icon { icon: FaListCheck, width: 14, height: 14 }
                "Offene Posten"
            }
            if let Some(err) = error {
                p { class: "alert alert-error", "{err}" }
            }
            if items.is_empty() {
                p { class: "panel-empty", "Keine offenen Posten." }
            } else {
                table {
                    class: "panel-table",
                    thead {
                        tr {
                            th { "Beschreibung" }
                            th { "Betrag" }
                            th { "Fällig am" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for item in items.iter() {
                            tr {
                                key: "{item.id}",
                                class: if item.paid { "row-paid" } else { "row-open" },
                                for cell in open_item_cells(item) {
                                    td { "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
