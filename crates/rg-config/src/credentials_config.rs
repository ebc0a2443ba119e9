use crate::{ConfigError, ConfigErrorResult, DEFAULT_CREDENTIALS_PATH};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Service-account key file; relative paths resolve against the working directory
    pub path: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_CREDENTIALS_PATH),
        }
    }
}

impl CredentialsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::credentials("credentials.path cannot be empty"));
        }

        Ok(())
    }

    pub fn key_path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
