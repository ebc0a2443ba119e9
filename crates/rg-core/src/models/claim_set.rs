use crate::{
    CoreError, MAX_CLAIMS_PAYLOAD_LENGTH, RESERVED_CLAIMS, ROLE_CLAIM, Result as CoreErrorResult,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user's custom claims: claim name -> claim value
///
/// Keys are kept sorted so the serialized payload is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-claim set `{"role": <role>}`
    pub fn role(role: impl Into<String>) -> Self {
        Self::new().with(ROLE_CLAIM, Value::String(role.into()))
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a claim, returning the previous value if one was replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Value of the `role` claim when it is a string
    pub fn role_name(&self) -> Option<&str> {
        self.get(ROLE_CLAIM).and_then(Value::as_str)
    }

    /// New set holding `self` overlaid with `overlay` (overlay wins on conflicts)
    pub fn merged_with(&self, overlay: &ClaimSet) -> ClaimSet {
        let mut merged = self.clone();
        for (name, value) in overlay.iter() {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }

    /// Check reserved names and payload size. An empty set is valid (it clears claims).
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(claim) = self
            .0
            .keys()
            .find(|name| RESERVED_CLAIMS.contains(&name.as_str()))
        {
            return Err(CoreError::ForbiddenClaim {
                claim: claim.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Measured the way the service measures it: UTF-16 code units
        let size = self.serialize()?.encode_utf16().count();
        if size > MAX_CLAIMS_PAYLOAD_LENGTH {
            return Err(CoreError::ClaimsTooLarge {
                size,
                max: MAX_CLAIMS_PAYLOAD_LENGTH,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate) but also rejects an empty set
    #[track_caller]
    pub fn validate_grant(&self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Err(CoreError::EmptyClaims {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.validate()
    }

    /// Validated JSON string sent as the user's `customAttributes`
    #[track_caller]
    pub fn to_payload(&self) -> CoreErrorResult<String> {
        self.validate()?;
        self.serialize()
    }

    /// Parse a `customAttributes` string returned by the identity service.
    ///
    /// An absent or blank payload means the user has no custom claims.
    #[track_caller]
    pub fn from_payload(payload: &str) -> CoreErrorResult<Self> {
        if payload.trim().is_empty() {
            return Ok(Self::new());
        }

        match serde_json::from_str::<Value>(payload) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(Value::Null) => Ok(Self::new()),
            Ok(other) => Err(CoreError::InvalidClaims {
                message: format!("expected a JSON object, got {}", other),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(CoreError::InvalidClaims {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    fn serialize(&self) -> CoreErrorResult<String> {
        serde_json::to_string(&self.0).map_err(|e| CoreError::InvalidClaims {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl std::fmt::Display for ClaimSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}
