use crate::{CoreError, MAX_UID_LENGTH, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Opaque user identifier assigned by the identity service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
    /// Validate and wrap a uid (non-empty, at most 128 characters)
    #[track_caller]
    pub fn new(uid: impl Into<String>) -> CoreErrorResult<Self> {
        let uid = uid.into();

        if uid.is_empty() || uid.chars().count() > MAX_UID_LENGTH {
            return Err(CoreError::InvalidUid {
                message: format!(
                    "the uid must be a non-empty string with at most {} characters",
                    MAX_UID_LENGTH
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(uid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserIdentity {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for UserIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
