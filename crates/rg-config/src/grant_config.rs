use crate::{ConfigError, ConfigErrorResult, DEFAULT_CLAIM_NAME, DEFAULT_ROLE};

use rg_core::ClaimMode;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GrantConfig {
    /// Role granted when none is given on the command line
    pub default_role: String,
    /// Claim name the role is stored under
    pub claim_name: String,
    /// "replace" overwrites all custom claims, "merge" keeps unrelated ones
    pub mode: ClaimMode,
}

impl Default for GrantConfig {
    fn default() -> Self {
        Self {
            default_role: String::from(DEFAULT_ROLE),
            claim_name: String::from(DEFAULT_CLAIM_NAME),
            mode: ClaimMode::default(),
        }
    }
}

impl GrantConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_role.trim().is_empty() {
            return Err(ConfigError::grant("grant.default_role cannot be empty"));
        }

        if self.claim_name.trim().is_empty() {
            return Err(ConfigError::grant("grant.claim_name cannot be empty"));
        }

        Ok(())
    }
}
