//! # Auth gateway
//!
//! [`AuthGateway`] turns the identity provider's sign-in and sign-up into a
//! persisted [`Session`]:
//!
//! 1. Validate the form locally (sign-up: password and confirmation must match).
//! 2. Ask the [`IdentityProvider`] for a token.
//! 3. Link the account to its backend customer via [`find_or_create_customer`].
//!    A failed link is logged and leaves `customer_id` empty; the dashboard
//!    retries it with [`relink`](AuthGateway::relink).
//! 4. Persist the session through the [`SessionStore`].
//!
//! Provider errors are returned unchanged so the form can show the provider's
//! own message.

use store::{Account, KeyValueStore, Session, SessionStore};

use super::{IdToken, IdentityProvider};
use crate::backend::{find_or_create_customer, Backend};
use crate::error::{ApiError, AuthError, PASSWORD_MISMATCH};

/// Sign-in/sign-up front door and owner of the session lifecycle.
#[derive(Clone, Debug)]
pub struct AuthGateway<I, B, S>
where
    I: IdentityProvider,
    B: Backend,
    S: KeyValueStore,
{
    identity: I,
    backend: B,
    sessions: SessionStore<S>,
}

impl<I, B, S> AuthGateway<I, B, S>
where
    I: IdentityProvider,
    B: Backend,
    S: KeyValueStore,
{
    pub fn new(identity: I, backend: B, store: S) -> Self {
        Self {
            identity,
            backend,
            sessions: SessionStore::new(store),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Session persisted by an earlier run. Never touches the network.
    pub async fn restore(&self) -> Option<Session> {
        self.sessions.restore().await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = email.trim();
        validate_credentials(email, password)?;

        let token = self.identity.sign_in_with_password(email, password).await?;
        tracing::info!("Signed in {}", token.email);
        Ok(self.establish(token).await)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Session, AuthError> {
        if password != confirmation {
            return Err(AuthError::Validation(PASSWORD_MISMATCH.to_string()));
        }
        let email = email.trim();
        validate_credentials(email, password)?;

        let token = self.identity.sign_up_with_password(email, password).await?;
        tracing::info!("Registered {}", token.email);
        Ok(self.establish(token).await)
    }

    /// End the session. Storage failures are logged; the caller treats the
    /// user as logged out regardless.
    pub async fn sign_out(&self) {
        if let Err(e) = self.sessions.clear().await {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        tracing::info!("Signed out");
    }

    /// Link a session that has no customer yet and persist the result.
    pub async fn relink(&self, session: &Session) -> Result<Session, ApiError> {
        let email = session.email().ok_or(ApiError::NoCustomer)?.to_string();
        let customer = find_or_create_customer(&self.backend, session, &email).await?;

        let account = Account::new(email, Some(customer.id));
        if let Err(e) = self.sessions.set_account(&account).await {
            tracing::warn!("Failed to persist linked account: {}", e);
        }
        Ok(Session {
            token: session.token.clone(),
            account: Some(account),
        })
    }

    async fn establish(&self, token: IdToken) -> Session {
        let session = Session::new(token.id_token);

        let customer_id = match find_or_create_customer(&self.backend, &session, &token.email).await {
            Ok(customer) => Some(customer.id),
            Err(e) => {
                tracing::warn!("Could not link {} to a backend customer: {}", token.email, e);
                None
            }
        };
        let session = session.with_account(Account::new(token.email, customer_id));

        if let Err(e) = self.sessions.persist(&session).await {
            tracing::warn!("Session not persisted, it will not survive a restart: {}", e);
        }
        session
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() {
        return Err(AuthError::Validation("Bitte E-Mail-Adresse eingeben".to_string()));
    }
    if password.is_empty() {
        return Err(AuthError::Validation("Bitte Passwort eingeben".to_string()));
    }
    Ok(())
}
