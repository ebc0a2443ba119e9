pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::claim_mode::ClaimMode;
pub use models::claim_set::ClaimSet;
pub use models::grant_receipt::GrantReceipt;
pub use models::user_identity::UserIdentity;

/// Claim name used for a plain role grant (`{"role": "..."}`)
pub const ROLE_CLAIM: &str = "role";

/// Role granted when the caller does not name one
pub const DEFAULT_ROLE: &str = "admin";

/// Maximum length of a user identifier accepted by the identity platform
pub const MAX_UID_LENGTH: usize = 128;

/// Maximum size of the serialized custom-claims payload, in UTF-16 code units
pub const MAX_CLAIMS_PAYLOAD_LENGTH: usize = 1000;

/// Claim names owned by the token issuer; developers may not set them
pub const RESERVED_CLAIMS: &[&str] = &[
    "acr",
    "amr",
    "at_hash",
    "aud",
    "auth_time",
    "azp",
    "cnf",
    "c_hash",
    "exp",
    "iat",
    "iss",
    "jti",
    "nbf",
    "nonce",
    "sub",
    "firebase",
];
