use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL};

use serde::Deserialize;

/// Where and how the identity service is reached
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Identity Toolkit REST root
    pub api_base_url: String,
    /// Overrides the project named in the credential file
    pub project_id: Option<String>,
    /// Multi-tenant projects: operate on this tenant's users
    pub tenant_id: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            project_id: None,
            tenant_id: None,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.api_base_url.starts_with("https://") && !self.api_base_url.starts_with("http://")
        {
            return Err(ConfigError::identity(format!(
                "identity.api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        if let Some(project_id) = &self.project_id
            && project_id.trim().is_empty()
        {
            return Err(ConfigError::identity(
                "identity.project_id cannot be empty when set",
            ));
        }

        if let Some(tenant_id) = &self.tenant_id
            && tenant_id.trim().is_empty()
        {
            return Err(ConfigError::identity(
                "identity.tenant_id cannot be empty when set",
            ));
        }

        Ok(())
    }
}
