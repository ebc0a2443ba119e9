mod config;
mod credentials_config;
mod error;
mod grant_config;
mod identity_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use credentials_config::CredentialsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use grant_config::GrantConfig;
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_NAME: &str = ".rg";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CREDENTIALS_PATH: &str = "serviceAccountKey.json";
const DEFAULT_API_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_ROLE: &str = "admin";
const DEFAULT_CLAIM_NAME: &str = "role";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
