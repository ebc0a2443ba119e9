use serde::{Deserialize, Serialize};

/// Claims of the self-signed JWT exchanged for an access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Issuer (service account email)
    pub iss: String,
    /// Subject (service account email)
    pub sub: String,
    /// Space-separated OAuth2 scopes
    pub scope: String,
    /// Audience (token endpoint)
    pub aud: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}
