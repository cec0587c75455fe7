use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error variant: an unreadable stored digest is a
/// mismatch, not a fault.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
