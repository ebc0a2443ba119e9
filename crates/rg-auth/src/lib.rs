pub mod access_token;
pub mod assertion_claims;
pub mod error;
pub mod service_account_key;
pub mod service_account_token_source;
pub mod token_source;

pub use access_token::AccessToken;
pub use assertion_claims::AssertionClaims;
pub use error::{AuthError, MAX_ERROR_BODY_CHARS, Result, summarize_body};
pub use service_account_key::ServiceAccountKey;
pub use service_account_token_source::ServiceAccountTokenSource;
pub use token_source::TokenSource;

#[cfg(test)]
mod tests;

/// Token endpoint used when the key file does not name one
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// OAuth2 grant type for signed-assertion exchange (RFC 7523)
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Scopes requested for identity administration
pub const DEFAULT_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/identitytoolkit",
];

/// Lifetime of a signed assertion, in seconds (the token endpoint's maximum)
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Refresh a cached access token this many seconds before it expires
pub const TOKEN_REFRESH_SKEW_SECS: i64 = 60;

const SERVICE_ACCOUNT_TYPE: &str = "service_account";
