use crate::{ClaimMode, ClaimSet, UserIdentity};

use serde::Serialize;

/// Confirmation that the identity service accepted a claims write
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrantReceipt {
    pub uid: UserIdentity,
    /// The claim set that was written (after merging, if any)
    pub claims: ClaimSet,
    pub mode: ClaimMode,
}
