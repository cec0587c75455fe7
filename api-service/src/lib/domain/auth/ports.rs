use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::user::models::User;

/// Port for the authentication service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `InactiveAccount` - Credentials valid but the account is disabled
    /// * `Repository` - User store read failed
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Validate a bearer token and return the freshly loaded user.
    ///
    /// The subject is re-fetched from the user store on every call; claims
    /// carried in the token are never trusted for authorization state.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token malformed, tampered, expired, or the
    ///   subject no longer exists
    /// * `Repository` - User store read failed
    async fn resolve(&self, token: &str) -> Result<User, AuthError>;
}
