use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid uid: {message} {location}")]
    InvalidUid {
        message: String,
        location: ErrorLocation,
    },

    #[error("Developer claim \"{claim}\" is reserved and cannot be specified {location}")]
    ForbiddenClaim {
        claim: String,
        location: ErrorLocation,
    },

    #[error(
        "Developer claims maximum payload size exceeded: {size} > {max} characters {location}"
    )]
    ClaimsTooLarge {
        size: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("At least one custom claim is required {location}")]
    EmptyClaims { location: ErrorLocation },

    #[error("Invalid custom claims: {message} {location}")]
    InvalidClaims {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim mode: {value} (expected 'replace' or 'merge') {location}")]
    InvalidClaimMode {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
