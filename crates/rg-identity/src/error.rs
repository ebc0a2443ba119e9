use crate::{USER_NOT_FOUND, api_error_body::ApiErrorDetail};

use rg_auth::{AuthError, summarize_body};
use rg_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

const PERMISSION_CODES: &[&str] = &["PERMISSION_DENIED", "INSUFFICIENT_PERMISSION"];
/// Upstream proxy or load-balancer failures: the service itself was not reached
const GATEWAY_STATUSES: &[StatusCode] = &[
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];
const CREDENTIAL_CODES: &[&str] = &[
    "UNAUTHENTICATED",
    "INVALID_ACCESS_TOKEN",
    "CREDENTIAL_TOO_OLD_LOGIN_AGAIN",
];

/// Why a claims request to the identity service failed
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Credential error: {source} {location}")]
    Credential {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error(
        "There is no user record corresponding to the provided identifier '{uid}': {message} {location}"
    )]
    InvalidIdentity {
        uid: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Permission denied: {message} {location}")]
    Permission {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
        location: ErrorLocation,
    },

    #[error("Identity service rejected the request: {message} (code: {code}) {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid request: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Malformed response: {message} {location}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Wrap a credential/token failure
    #[track_caller]
    pub fn credential(err: AuthError) -> Self {
        IdentityError::Credential {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a local validation failure
    #[track_caller]
    pub fn validation(err: CoreError) -> Self {
        IdentityError::Validation {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_identity(uid: &str, message: impl Into<String>) -> Self {
        IdentityError::InvalidIdentity {
            uid: uid.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify an error response from the identity service
    #[track_caller]
    pub fn from_api(status: StatusCode, detail: &ApiErrorDetail, uid: &str) -> Self {
        let code = detail.error_code();
        let message = if detail.message.is_empty() {
            status.to_string()
        } else {
            detail.message.clone()
        };
        let location = ErrorLocation::from(Location::caller());

        if code == USER_NOT_FOUND {
            return IdentityError::InvalidIdentity {
                uid: uid.to_string(),
                message,
                location,
            };
        }

        if status == StatusCode::FORBIDDEN || PERMISSION_CODES.contains(&code.as_str()) {
            return IdentityError::Permission { message, location };
        }

        if status == StatusCode::UNAUTHORIZED || CREDENTIAL_CODES.contains(&code.as_str()) {
            return IdentityError::Credential {
                source: AuthError::TokenRejected {
                    code,
                    message,
                    location: ErrorLocation::from(Location::caller()),
                },
                location,
            };
        }

        if GATEWAY_STATUSES.contains(&status) {
            return Self::gateway(status, &detail.message, location);
        }

        IdentityError::Rejected {
            code,
            message,
            location,
        }
    }

    /// Classify an error response whose body is not the service's JSON envelope
    #[track_caller]
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let summary = summarize_body(body);
        let location = ErrorLocation::from(Location::caller());

        if GATEWAY_STATUSES.contains(&status) {
            return Self::gateway(status, &summary, location);
        }

        IdentityError::Rejected {
            code: status.as_u16().to_string(),
            message: if summary.is_empty() {
                status.to_string()
            } else {
                summary
            },
            location,
        }
    }

    fn gateway(status: StatusCode, detail: &str, location: ErrorLocation) -> Self {
        let message = if detail.is_empty() {
            format!("gateway returned {}", status)
        } else {
            format!("gateway returned {}: {}", status, detail)
        };

        IdentityError::Transport {
            message,
            source: None,
            location,
        }
    }

    /// Machine-readable code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Credential { .. } => "CREDENTIAL",
            Self::InvalidIdentity { .. } => "INVALID_IDENTITY",
            Self::Permission { .. } => "PERMISSION_DENIED",
            Self::Transport { .. } => "TRANSPORT",
            Self::Rejected { .. } => "REJECTED",
            Self::Validation { .. } => "VALIDATION",
            Self::Json { .. } => "MALFORMED_RESPONSE",
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        IdentityError::Transport {
            message: err.to_string(),
            source: Some(err),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        IdentityError::Json {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for IdentityError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        IdentityError::validation(err)
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
