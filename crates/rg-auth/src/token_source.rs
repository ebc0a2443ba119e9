use crate::{AccessToken, Result as AuthErrorResult};

use async_trait::async_trait;

/// Supplies bearer tokens for calls to the identity service
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> AuthErrorResult<AccessToken>;
}
