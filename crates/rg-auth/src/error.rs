use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to read credential file {path}: {source} {location}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed credential file: {source} {location}")]
    KeyFormat {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid credential field '{field}': {message} {location}")]
    InvalidKey {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to sign assertion: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token endpoint rejected credential: {message} (code: {code}) {location}")]
    TokenRejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token request failed: {message} {location}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Malformed token response: {source} {location}")]
    TokenResponse {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::KeyFile { .. } => "CREDENTIAL_FILE_UNREADABLE",
            Self::KeyFormat { .. } => "CREDENTIAL_MALFORMED",
            Self::InvalidKey { .. } => "CREDENTIAL_INVALID",
            Self::Signing { .. } => "ASSERTION_SIGNING_FAILED",
            Self::TokenRejected { .. } => "TOKEN_REJECTED",
            Self::Http { .. } => "TOKEN_TRANSPORT",
            Self::TokenResponse { .. } => "TOKEN_RESPONSE_MALFORMED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// Longest excerpt of a non-JSON error body kept in an error message
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Collapse an unstructured error body (an HTML gateway page, say) into one bounded line
pub fn summarize_body(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return collapsed;
    }

    let mut excerpt: String = collapsed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}
