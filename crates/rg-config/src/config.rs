use crate::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, CredentialsConfig,
    GrantConfig, IdentityConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub credentials: CredentialsConfig,
    pub identity: IdentityConfig,
    pub grant: GrantConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RG_CONFIG_DIR env var, else use ./.rg/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply GOOGLE_APPLICATION_CREDENTIALS and RG_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RG_CONFIG_DIR env var > ./.rg/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("RG_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors before any request is made.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.credentials.validate()?;
        self.identity.validate()?;
        self.grant.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty when set"));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs key material).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  credentials: {}", self.credentials.path);
        info!(
            "  identity: {} (project: {}, tenant: {})",
            self.identity.api_base_url,
            self.identity
                .project_id
                .as_deref()
                .unwrap_or("<from credentials>"),
            self.identity.tenant_id.as_deref().unwrap_or("<none>")
        );
        info!(
            "  grant: {}={} ({})",
            self.grant.claim_name, self.grant.default_role, self.grant.mode
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Credentials: the platform-wide variable first, ours wins
        Self::apply_env_string(
            "GOOGLE_APPLICATION_CREDENTIALS",
            &mut self.credentials.path,
        );
        Self::apply_env_string("RG_CREDENTIALS_PATH", &mut self.credentials.path);

        // Identity
        Self::apply_env_string("RG_API_BASE_URL", &mut self.identity.api_base_url);
        Self::apply_env_option_string("RG_PROJECT_ID", &mut self.identity.project_id);
        Self::apply_env_option_string("RG_TENANT_ID", &mut self.identity.tenant_id);

        // Grant
        Self::apply_env_string("RG_DEFAULT_ROLE", &mut self.grant.default_role);
        Self::apply_env_string("RG_CLAIM_NAME", &mut self.grant.claim_name);
        if let Ok(val) = std::env::var("RG_CLAIM_MODE") {
            self.grant.mode = val.parse().map_err(|e| {
                ConfigError::grant(format!("RG_CLAIM_MODE: {}", e))
            })?;
        }

        // Logging
        Self::apply_env_parse("RG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RG_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
