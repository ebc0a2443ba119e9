use crate::ClaimMode;

use std::str::FromStr;

#[test]
fn test_claim_mode_as_str() {
    assert_eq!(ClaimMode::Replace.as_str(), "replace");
    assert_eq!(ClaimMode::Merge.as_str(), "merge");
}

#[test]
fn test_claim_mode_from_str() {
    assert_eq!(ClaimMode::from_str("replace").unwrap(), ClaimMode::Replace);
    assert_eq!(ClaimMode::from_str("MERGE").unwrap(), ClaimMode::Merge);
    assert!(ClaimMode::from_str("append").is_err());
}

#[test]
fn test_claim_mode_default_is_replace() {
    assert_eq!(ClaimMode::default(), ClaimMode::Replace);
}
