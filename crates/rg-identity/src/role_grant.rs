use crate::{IdentityService, Result as IdentityErrorResult};

use rg_core::{ClaimMode, ClaimSet, GrantReceipt, UserIdentity};

use log::{debug, info};

/// Grants custom claims (typically a role) to a user through an [`IdentityService`].
///
/// Each call is one attempt: Pending until the service answers, then `Ok` (succeeded)
/// or `Err` (failed). Nothing is retried.
pub struct RoleGrant<'a> {
    service: &'a dyn IdentityService,
}

impl<'a> RoleGrant<'a> {
    pub fn new(service: &'a dyn IdentityService) -> Self {
        Self { service }
    }

    /// Write `claims` to the user.
    ///
    /// In [`ClaimMode::Replace`] the user's custom claims become exactly `claims` (one write).
    /// In [`ClaimMode::Merge`] the current claims are read first and `claims` is laid
    /// over them (one read, one write). Invalid input is rejected before any request.
    pub async fn grant(
        &self,
        uid: &UserIdentity,
        claims: &ClaimSet,
        mode: ClaimMode,
    ) -> IdentityErrorResult<GrantReceipt> {
        claims.validate_grant()?;

        let effective = match mode {
            ClaimMode::Replace => claims.clone(),
            ClaimMode::Merge => {
                let existing = self.service.custom_claims(uid).await?;
                debug!("Existing claims for {}: {}", uid, existing);
                existing.merged_with(claims)
            }
        };

        // A merge can push the payload over the size limit
        effective.validate()?;

        self.service.set_custom_claims(uid, &effective).await?;
        info!("Custom claims for {} set to {} ({})", uid, effective, mode);

        Ok(GrantReceipt {
            uid: uid.clone(),
            claims: effective,
            mode,
        })
    }

    /// Grant a single role under `claim_name`
    pub async fn grant_role(
        &self,
        uid: &UserIdentity,
        claim_name: &str,
        role: &str,
        mode: ClaimMode,
    ) -> IdentityErrorResult<GrantReceipt> {
        let claims = ClaimSet::new().with(claim_name, role);
        self.grant(uid, &claims, mode).await
    }

    /// Remove every custom claim from the user
    pub async fn revoke(&self, uid: &UserIdentity) -> IdentityErrorResult<GrantReceipt> {
        let empty = ClaimSet::new();

        self.service.set_custom_claims(uid, &empty).await?;
        info!("Custom claims for {} cleared", uid);

        Ok(GrantReceipt {
            uid: uid.clone(),
            claims: empty,
            mode: ClaimMode::Replace,
        })
    }

    /// Read the user's current custom claims
    pub async fn inspect(&self, uid: &UserIdentity) -> IdentityErrorResult<ClaimSet> {
        self.service.custom_claims(uid).await
    }
}
