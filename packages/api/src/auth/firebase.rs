//! # Firebase Authentication over REST
//!
//! Implements [`IdentityProvider`] against the Identity Toolkit REST API that
//! the Firebase JS SDK uses under the hood.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | sign in | `POST {base}/accounts:signInWithPassword?key={api_key}` |
//! | sign up | `POST {base}/accounts:signUp?key={api_key}` |
//!
//! Both take `{ email, password, returnSecureToken: true }` and answer with
//! an `idToken` (the bearer token the backend verifies), the account `email`
//! and its `localId`.
//!
//! ## Errors
//!
//! Failures come back as `{ "error": { "code": 400, "message": "EMAIL_NOT_FOUND" } }`.
//! The `message` is passed to the user unchanged as [`AuthError::Provider`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use store::config::IdentityConfig;

use super::{IdToken, IdentityProvider};
use crate::error::AuthError;

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    id_token: String,
    email: String,
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Firebase identity provider.
#[derive(Clone, Debug)]
pub struct FirebaseIdentity {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FirebaseIdentity {
    pub fn new(config: &IdentityConfig) -> Self {
        Self::with_base_url(config, IDENTITY_TOOLKIT_URL)
    }

    /// Point the client at a different Identity Toolkit host (e.g. the
    /// Firebase Auth emulator).
    pub fn with_base_url(config: &IdentityConfig, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, method, self.api_key)
    }

    async fn password_call(
        &self,
        method: &str,
        email: &str,
        password: &str,
    ) -> Result<IdToken, AuthError> {
        if self.api_key.is_empty() {
            tracing::error!("Firebase API key missing; set ACCT_FIREBASE_API_KEY");
        }

        let response = self
            .client
            .post(self.endpoint(method))
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::Provider(provider_message(status.as_u16(), &body)));
        }

        let parsed: PasswordResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::Provider(format!("Unerwartete Antwort: {e}")))?;

        Ok(IdToken {
            id_token: parsed.id_token,
            email: parsed.email,
            local_id: parsed.local_id,
        })
    }
}

impl IdentityProvider for FirebaseIdentity {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<IdToken, AuthError> {
        self.password_call("signInWithPassword", email, password).await
    }

    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<IdToken, AuthError> {
        self.password_call("signUp", email, password).await
    }
}

/// Extract the provider's error message from a failed response body.
fn provider_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => format!("HTTP {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let config = IdentityConfig {
            api_key: "k123".to_string(),
            project_id: "acct".to_string(),
        };
        let firebase = FirebaseIdentity::new(&config);
        assert_eq!(
            firebase.endpoint("signInWithPassword"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=k123"
        );

        let emulator = FirebaseIdentity::with_base_url(
            &config,
            "http://localhost:9099/identitytoolkit.googleapis.com/v1/",
        );
        assert_eq!(
            emulator.endpoint("signUp"),
            "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signUp?key=k123"
        );
    }

    #[test]
    fn test_request_body_is_camel_case() {
        let body = serde_json::to_value(PasswordRequest {
            email: "a@b.de",
            password: "geheim",
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(body["returnSecureToken"], true);
        assert_eq!(body["email"], "a@b.de");
    }

    #[test]
    fn test_success_body() {
        let body = r#"{"kind":"identitytoolkit#VerifyPasswordResponse","localId":"uid-1","email":"a@b.de","displayName":"","idToken":"eyJ.x.y","registered":true,"refreshToken":"r","expiresIn":"3600"}"#;
        let parsed: PasswordResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.id_token, "eyJ.x.y");
        assert_eq!(parsed.local_id, "uid-1");
    }

    #[test]
    fn test_provider_message_is_verbatim() {
        let body = r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS","errors":[{"message":"INVALID_LOGIN_CREDENTIALS","domain":"global","reason":"invalid"}]}}"#;
        assert_eq!(provider_message(400, body), "INVALID_LOGIN_CREDENTIALS");

        let weak = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
        assert_eq!(
            provider_message(400, weak),
            "WEAK_PASSWORD : Password should be at least 6 characters"
        );
    }

    #[test]
    fn test_provider_message_without_json() {
        assert_eq!(provider_message(503, "<html>busy</html>"), "HTTP 503");
    }
}
