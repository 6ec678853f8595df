//! Error types shared by the identity and backend clients.

use thiserror::Error;

/// Message shown when sign-up password and confirmation differ.
pub const PASSWORD_MISMATCH: &str = "Passwörter stimmen nicht überein";

/// Failure of a sign-in or sign-up attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Rejected by the identity provider; the message is the provider's own.
    #[error("{0}")]
    Provider(String),

    #[error("Anmeldedienst nicht erreichbar: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure of a call to the accounting backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401).
    #[error("Sitzung abgelaufen, bitte erneut anmelden")]
    Unauthorized,

    /// The session has not been linked to a backend customer.
    #[error("Kein Kundenkonto verknüpft")]
    NoCustomer,

    #[error("Keine Datei ausgewählt")]
    EmptyFile,

    #[error("Anfrage fehlgeschlagen (HTTP {0})")]
    Status(u16),

    #[error("Backend nicht erreichbar: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ungültige Antwort: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the session should end because of this error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
