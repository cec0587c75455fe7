use thiserror::Error;

/// Error type for token operations.
///
/// Validation failures are distinguished internally; callers that face the
/// outside world are expected to collapse them into a single unauthenticated
/// outcome.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
