mod claim_mode;
mod claim_set;
mod user_identity;
