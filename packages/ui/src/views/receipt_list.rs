use api::Receipt;
use dioxus::prelude::*;

use crate::dashboard::receipt_cells;
use crate::icons::FaReceipt;
use crate::Icon;

/// Table of uploaded receipts.
#[component]
pub fn ReceiptList(receipts: Vec<Receipt>, #[props(!optional)] error: Option<String>) -> Element {
    rsx! {
        div {
            class: "panel",
            h2 {
                class: "panel-title",
                Icon { icon: FaReceipt, width: 14, height: 14 }
                "Hochgeladene Belege"
            }
            if let Some(err) = error {
                p { class: "alert alert-error", "{err}" }
            }
            if receipts.is_empty() {
                p { class: "panel-empty", "Keine Belege vorhanden." }
            } else {
                table {
                    class: "panel-table",
                    thead {
                        tr {
                            th { "Datum" }
                            th { "Lieferant" }
                            th { "Netto" }
                            th { "USt" }
                            th { "Brutto" }
                        }
                    }
                    tbody {
                        // Receipts are not deduplicated, so keys use the position.
                        for (idx, receipt) in receipts.iter().enumerate() {
                            tr {
                                key: "{idx}-{receipt.id}",
                                for cell in receipt_cells(receipt) {
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
