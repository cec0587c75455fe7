use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token claims: a signed, time-bounded assertion of identity.
///
/// Subject and expiry are mandatory; a token missing either fails to
/// deserialize and is rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject with an expiry relative to now.
    ///
    /// # Arguments
    /// * `subject` - User identifier to embed as `sub`
    /// * `ttl_minutes` - Minutes until the token expires
    pub fn for_subject(subject: impl ToString, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        Self {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Create claims with an explicit expiry timestamp.
    ///
    /// # Arguments
    /// * `subject` - User identifier to embed as `sub`
    /// * `exp` - Absolute expiration (Unix timestamp)
    pub fn with_expiration(subject: impl ToString, exp: i64) -> Self {
        Self {
            sub: subject.to_string(),
            exp,
            iat: Utc::now().timestamp(),
        }
    }

    /// Check whether the claims are expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject_sets_expiry() {
        let claims = Claims::for_subject("user123", 30);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_with_expiration() {
        let claims = Claims::with_expiration("user123", 1234567890);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp, 1234567890);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::with_expiration("user123", 1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
