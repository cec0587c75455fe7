use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Authentication service: credential verification and token resolution
/// against the user store.
///
/// The signing secret and token lifetime are injected at construction;
/// nothing here reads ambient process state.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl_minutes: i64,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `users` - User store used for credential lookup and token resolution
    /// * `authenticator` - Shared credential/token coordinator
    /// * `token_ttl_minutes` - Lifetime of issued tokens
    pub fn new(users: Arc<UR>, authenticator: Arc<Authenticator>, token_ttl_minutes: i64) -> Self {
        Self {
            users,
            authenticator,
            token_ttl_minutes,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        // A name that fails validation cannot belong to any stored user, so
        // it collapses to the same error as an unknown one.
        let username =
            Username::new(username.to_string()).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_username(&username)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .authenticator
            .verify_password(password, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AuthError::InactiveAccount);
        }

        let claims = Claims::for_subject(user.id, self.token_ttl_minutes);
        let token = self
            .authenticator
            .generate_token(&claims)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        Ok(AccessToken::bearer(token))
    }

    async fn resolve(&self, token: &str) -> Result<User, AuthError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Token validation failed");
                AuthError::Unauthenticated
            })?;

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| AuthError::Unauthenticated)?;

        // Mandatory re-fetch: the token may outlive the account, and flags
        // like is_superuser must come from current store state.
        self.users
            .find_by_id(&user_id)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?
            .ok_or(AuthError::Unauthenticated)
    }
}
