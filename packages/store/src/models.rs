//! # Domain models for the accounting backend
//!
//! Defines the records the dashboard reads from (and, for receipts, writes to)
//! the accounting backend. These types are `Serialize + Deserialize` so the
//! JSON bodies of the backend API map onto them directly.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Receipt`] | An uploaded supplier document (Beleg). Every extracted value is optional because OCR may not find it. |
//! | [`OpenItem`] | An outstanding payable/receivable (offener Posten) with a due date and a paid flag. |
//! | [`UstvaEntry`] | A monthly VAT pre-declaration summary (UStVA) with net, tax and gross sums. |
//! | [`Customer`] | The backend owner record every receipt, open item and UStVA entry belongs to. |
//!
//! Money is carried as [`Decimal`] so amounts like `119.00` survive the round
//! trip unchanged. The backend sends decimals either as JSON numbers or as
//! strings; both deserialize.
//!
//! Fields the backend returns but the dashboard never shows (`file_path`,
//! `uploaded_at`, `generated_at`, ...) are kept optional so older and newer
//! backend versions both parse.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A receipt as returned by `POST /receipts/upload` and `GET /receipts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub net_amount: Option<Decimal>,
    #[serde(default)]
    pub tax_amount: Option<Decimal>,
    #[serde(default)]
    pub gross_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<NaiveDateTime>,
}

/// An open item as returned by `GET /open-items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpenItem {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
}

/// A VAT filing summary as returned by `GET /ustva/{customer_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UstvaEntry {
    pub id: i64,
    /// Filing period, `YYYY-MM`.
    pub period: String,
    pub net_sum: Decimal,
    pub tax_sum: Decimal,
    pub gross_sum: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<NaiveDateTime>,
}

/// Backend customer record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub vat_id: Option<String>,
}

/// Body of `POST /customers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
}

impl NewCustomer {
    /// Customer draft for a freshly signed-up account. The display name
    /// defaults to the local part of the email address.
    pub fn for_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            name,
            email: email.to_string(),
            vat_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_receipt_from_numeric_json() {
        let json = r#"{"id":1,"date":"2024-01-01","supplier":"ACME","net_amount":100,"tax_amount":19,"gross_amount":119}"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();

        assert_eq!(receipt.id, 1);
        assert_eq!(receipt.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(receipt.supplier.as_deref(), Some("ACME"));
        assert_eq!(receipt.net_amount, Some(Decimal::from(100)));
        assert_eq!(receipt.tax_amount, Some(Decimal::from(19)));
        assert_eq!(receipt.gross_amount, Some(Decimal::from(119)));
        assert!(receipt.file_path.is_none());
    }

    #[test]
    fn test_receipt_with_backend_extras_and_nulls() {
        let json = r#"{
            "id": 7,
            "date": null,
            "supplier": null,
            "net_amount": "84.03",
            "tax_amount": null,
            "gross_amount": "100.00",
            "customer_id": 3,
            "file_path": "/tmp/uploads/scan.pdf",
            "uploaded_at": "2024-03-05T10:11:12"
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();

        assert!(receipt.date.is_none());
        assert!(receipt.supplier.is_none());
        assert_eq!(receipt.net_amount, Some(Decimal::from_str("84.03").unwrap()));
        assert!(receipt.tax_amount.is_none());
        assert_eq!(receipt.customer_id, Some(3));
        assert_eq!(receipt.file_path.as_deref(), Some("/tmp/uploads/scan.pdf"));
    }

    #[test]
    fn test_open_item_paid_defaults_to_false() {
        let json = r#"{"id":5,"description":"Invoice 12","amount":250,"due_date":"2024-02-01"}"#;
        let item: OpenItem = serde_json::from_str(json).unwrap();
        assert!(!item.paid);
        assert_eq!(item.amount, Decimal::from(250));
    }

    #[test]
    fn test_ustva_entry() {
        let json = r#"{"id":2,"period":"2024-01","net_sum":"1000.00","tax_sum":"190.00","gross_sum":"1190.00","customer_id":1,"generated_at":"2024-02-10T06:00:00"}"#;
        let entry: UstvaEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.period, "2024-01");
        assert_eq!(entry.tax_sum, Decimal::from_str("190.00").unwrap());
    }

    #[test]
    fn test_new_customer_name_from_email() {
        let draft = NewCustomer::for_email("erika.muster@example.de");
        assert_eq!(draft.name, "erika.muster");
        assert_eq!(draft.email, "erika.muster@example.de");

        let body = serde_json::to_string(&draft).unwrap();
        assert!(!body.contains("vat_id"));
    }
}
