use api::UstvaEntry;
use dioxus::prelude::*;

use crate::dashboard::ustva_cells;
use crate::icons::FaScaleBalanced;
use crate::Icon;

/// Table of VAT pre-declarations (UStVA) per period.
#[component]
pub fn UstvaStatus(entries: Vec<UstvaEntry>, #[props(!optional)] error: Option<String>) -> Element {
    rsx! {
        div {
            class: "panel",
            h2 {
                class: "panel-title",
                Icon { icon: FaScaleBalanced, width: 14, height: 14 }
                "Umsatzsteuervoranmeldung"
            }
            if let Some(err) = error {
                p { class: "alert alert-error", "{err}" }
            }
            if entries.is_empty() {
                p { class: "panel-empty", "Keine UStVA vorhanden." }
            } else {
                table {
                    class: "panel-table",
                    thead {
                        tr {
                            th { "Zeitraum" }
                            th { "Netto" }
                            th { "USt" }
                            th { "Brutto" }
                        }
                    }
                    tbody {
                        for entry in entries.iter() {
                            tr {
                                key: "{entry.id}",
                                for cell in ustva_cells(entry) {
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
