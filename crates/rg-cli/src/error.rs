use rg_auth::AuthError;
use rg_config::ConfigError;
use rg_identity::IdentityError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential error: {0}")]
    Credential(#[from] AuthError),

    #[error("{0}")]
    Identity(#[from] IdentityError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
