//! Authentication against the external identity provider.

mod firebase;
mod gateway;

pub use firebase::FirebaseIdentity;
pub use gateway::AuthGateway;

use crate::error::AuthError;

/// Credential issued by the identity provider for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdToken {
    /// Bearer token presented to the backend.
    pub id_token: String,
    pub email: String,
    /// Provider-side user id.
    pub local_id: String,
}

/// Async trait for the identity provider's email/password capabilities.
pub trait IdentityProvider {
    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<IdToken, AuthError>>;
    fn sign_up_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<IdToken, AuthError>>;
}
