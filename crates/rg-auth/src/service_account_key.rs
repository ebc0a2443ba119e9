use crate::{
    ASSERTION_LIFETIME_SECS, AssertionClaims, AuthError, DEFAULT_TOKEN_URI,
    Result as AuthErrorResult, SERVICE_ACCOUNT_TYPE,
};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Deserialize;

/// Service-account key file as downloaded from the cloud console
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    String::from(DEFAULT_TOKEN_URI)
}

impl ServiceAccountKey {
    /// Read, parse and validate a key file
    #[track_caller]
    pub fn from_file(path: &Path) -> AuthErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AuthError::KeyFile {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::from_json(&contents)
    }

    /// Parse and validate key material
    #[track_caller]
    pub fn from_json(json: &str) -> AuthErrorResult<Self> {
        let key: Self = serde_json::from_str(json).map_err(|e| AuthError::KeyFormat {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        key.validate()?;
        Ok(key)
    }

    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.key_type != SERVICE_ACCOUNT_TYPE {
            return Err(Self::invalid(
                "type",
                format!(
                    "expected '{}', got '{}'",
                    SERVICE_ACCOUNT_TYPE, self.key_type
                ),
            ));
        }

        if self.project_id.trim().is_empty() {
            return Err(Self::invalid("project_id", "cannot be empty"));
        }

        if self.client_email.trim().is_empty() {
            return Err(Self::invalid("client_email", "cannot be empty"));
        }

        if !self.private_key.contains("-----BEGIN") {
            return Err(Self::invalid(
                "private_key",
                "must be a PEM-encoded RSA private key",
            ));
        }

        if self.token_uri.trim().is_empty() {
            return Err(Self::invalid("token_uri", "cannot be empty"));
        }

        Ok(())
    }

    /// Build the RS256 assertion for the OAuth2 JWT-bearer grant
    #[track_caller]
    pub fn sign_assertion(&self, scopes: &[String], now: i64) -> AuthErrorResult<String> {
        let encoding_key =
            EncodingKey::from_rsa_pem(self.private_key.as_bytes()).map_err(|e| {
                AuthError::Signing {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let mut header = Header::new(Algorithm::RS256);
        if !self.private_key_id.is_empty() {
            header.kid = Some(self.private_key_id.clone());
        }

        let claims = AssertionClaims {
            iss: self.client_email.clone(),
            sub: self.client_email.clone(),
            scope: scopes.join(" "),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        encode(&header, &claims, &encoding_key).map_err(|e| AuthError::Signing {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn invalid(field: &str, message: impl Into<String>) -> AuthError {
        AuthError::InvalidKey {
            field: field.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
