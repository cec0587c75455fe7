use thiserror::Error;

/// Authentication flow errors.
///
/// `InvalidCredentials` and `InactiveAccount` are distinguished internally
/// but must surface externally as one identical unauthorized outcome, so a
/// caller cannot probe which usernames exist or which accounts are disabled.
/// `Unauthenticated` likewise absorbs every token-validation failure
/// (malformed, tampered, expired, subject gone).
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is inactive")]
    InactiveAccount,

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
