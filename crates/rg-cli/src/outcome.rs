use rg_core::{ClaimSet, GrantReceipt, UserIdentity};

/// What a successful command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Granted { receipt: GrantReceipt, role: String },
    Revoked { receipt: GrantReceipt },
    Claims { uid: UserIdentity, claims: ClaimSet },
}

impl Outcome {
    /// The single line printed to stdout
    pub fn success_line(&self) -> String {
        match self {
            Self::Granted { receipt, role } => format!(
                "Success: User {} now has role '{}' (custom claims: {}).",
                receipt.uid, role, receipt.claims
            ),
            Self::Revoked { receipt } => {
                format!("Success: User {} no longer has custom claims.", receipt.uid)
            }
            Self::Claims { claims, .. } => claims.to_string(),
        }
    }
}
