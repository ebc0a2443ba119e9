use crate::Result as IdentityErrorResult;

use rg_core::{ClaimSet, UserIdentity};

use async_trait::async_trait;

/// The slice of an identity-management service needed to manage custom claims
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Replace the user's custom claims with `claims` (an empty set clears them)
    async fn set_custom_claims(
        &self,
        uid: &UserIdentity,
        claims: &ClaimSet,
    ) -> IdentityErrorResult<()>;

    /// Current custom claims of the user
    async fn custom_claims(&self, uid: &UserIdentity) -> IdentityErrorResult<ClaimSet>;
}
