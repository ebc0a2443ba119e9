pub mod claim_mode;
pub mod claim_set;
pub mod grant_receipt;
pub mod user_identity;
