/// A freshly issued bearer credential.
///
/// Stateless: nothing is persisted server-side at issuance, and the token
/// cannot be revoked before its expiry.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    /// Wrap a signed token as a bearer credential.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
