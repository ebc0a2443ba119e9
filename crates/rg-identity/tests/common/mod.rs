use rg_auth::{AccessToken, AuthError, Result as AuthErrorResult, TokenSource};
use rg_identity::IdentityToolkitClient;

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;

pub const PROJECT_ID: &str = "demo-project";
pub const TEST_TOKEN: &str = "ya29.test-token";

/// Always hands out the same token
pub struct StaticTokenSource;

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn access_token(&self) -> AuthErrorResult<AccessToken> {
        Ok(AccessToken::new(TEST_TOKEN, i64::MAX))
    }
}

/// Simulates a credential the token endpoint refuses
#[derive(Default)]
pub struct RejectingTokenSource {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl TokenSource for RejectingTokenSource {
    async fn access_token(&self) -> AuthErrorResult<AccessToken> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AuthError::TokenRejected {
            code: "invalid_grant".to_string(),
            message: "Invalid JWT Signature.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

pub fn client(base_url: &str) -> IdentityToolkitClient {
    IdentityToolkitClient::new(base_url, PROJECT_ID, Arc::new(StaticTokenSource))
}

pub fn update_path() -> String {
    format!("/v1/projects/{}/accounts:update", PROJECT_ID)
}

pub fn lookup_path() -> String {
    format!("/v1/projects/{}/accounts:lookup", PROJECT_ID)
}
