//! Dashboard data and the formatting rules of its panels.

use api::{ApiError, OpenItem, Receipt, ReceiptFile, UstvaEntry};

/// Placeholder for values the backend did not extract.
pub const MISSING: &str = "-";

pub const UPLOAD_OK: &str = "Beleg hochgeladen";
pub const UPLOAD_FAILED: &str = "Upload fehlgeschlagen";

/// Items of one panel plus the error of the fetch that filled it.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> Panel<T> {
    /// Replace the panel contents with a fetch result.
    pub fn load(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Panel fetch failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The three lists the dashboard shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardData {
    pub receipts: Panel<Receipt>,
    pub open_items: Panel<OpenItem>,
    pub ustva: Panel<UstvaEntry>,
}

impl DashboardData {
    /// Add a freshly uploaded receipt at the end. No dedup by id.
    pub fn append_receipt(&mut self, receipt: Receipt) {
        self.receipts.items.push(receipt);
    }

    /// Apply a `GET /receipts` result. Receipts uploaded while the fetch was
    /// in flight are kept after the fetched ones unless the snapshot already
    /// contains their id.
    pub fn load_receipts(&mut self, result: Result<Vec<Receipt>, ApiError>) {
        let fetched = match result {
            Ok(fetched) => fetched,
            Err(e) => {
                self.receipts.load(Err(e));
                return;
            }
        };
        let pending: Vec<Receipt> = self
            .receipts
            .items
            .drain(..)
            .filter(|local| !fetched.iter().any(|r| r.id == local.id))
            .collect();
        self.receipts.load(Ok(fetched));
        self.receipts.items.extend(pending);
    }
}

/// The upload button is only enabled for a picked, non-empty file and while
/// no upload is running.
pub fn can_submit_upload(file: Option<&ReceiptFile>, uploading: bool) -> bool {
    !uploading && file.is_some_and(|f| !f.is_empty())
}

/// Status line after a failed upload.
pub fn upload_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized | ApiError::NoCustomer | ApiError::EmptyFile => error.to_string(),
        _ => UPLOAD_FAILED.to_string(),
    }
}

/// Message for the login form when a backend error ends the session, `None`
/// when the session survives the error.
///
/// A session that cannot be linked to a customer (no stored account) is ended
/// too, since signing in again restores the account.
pub fn session_end_notice(error: &ApiError) -> Option<String> {
    match error {
        ApiError::Unauthorized => Some(error.to_string()),
        ApiError::NoCustomer => Some(format!("{error}, bitte erneut anmelden")),
        _ => None,
    }
}

fn or_missing<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_else(|| MISSING.to_string())
}

/// Cells of a receipt row: date, supplier, net, tax, gross.
pub fn receipt_cells(receipt: &Receipt) -> [String; 5] {
    [
        or_missing(receipt.date.as_ref()),
        receipt
            .supplier
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING)
            .to_string(),
        or_missing(receipt.net_amount.as_ref()),
        or_missing(receipt.tax_amount.as_ref()),
        or_missing(receipt.gross_amount.as_ref()),
    ]
}

/// Cells of a UStVA row: period, net, tax, gross.
pub fn ustva_cells(entry: &UstvaEntry) -> [String; 4] {
    [
        entry.period.clone(),
        entry.net_sum.to_string(),
        entry.tax_sum.to_string(),
        entry.gross_sum.to_string(),
    ]
}

pub fn open_item_status(item: &OpenItem) -> &'static str {
    if item.paid {
        "bezahlt"
    } else {
        "offen"
    }
}

/// Cells of an open item row: description, amount, due date, status.
pub fn open_item_cells(item: &OpenItem) -> [String; 4] {
    [
        item.description.clone(),
        item.amount.to_string(),
        item.due_date.to_string(),
        open_item_status(item).to_string(),
    ]
}
