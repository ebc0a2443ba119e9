//! rg-identity
//!
//! The role-grant operation and the identity-service capability it runs against.

pub mod api_error_body;
pub mod error;
pub mod identity_service;
pub mod identity_toolkit_client;
pub mod role_grant;

#[cfg(test)]
mod tests;

pub use error::{IdentityError, Result};
pub use identity_service::IdentityService;
pub use identity_toolkit_client::IdentityToolkitClient;
pub use role_grant::RoleGrant;

pub use reqwest::StatusCode;

/// Service error code for an unknown uid
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
