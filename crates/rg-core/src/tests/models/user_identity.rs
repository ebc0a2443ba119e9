use crate::{CoreError, MAX_UID_LENGTH, UserIdentity};

use std::str::FromStr;

#[test]
fn given_plain_uid_when_new_then_ok() {
    let uid = UserIdentity::new("hCVUcfYV6jTiM4cu8VdcNuB6Aaz2").unwrap();

    assert_eq!(uid.as_str(), "hCVUcfYV6jTiM4cu8VdcNuB6Aaz2");
    assert_eq!(uid.to_string(), "hCVUcfYV6jTiM4cu8VdcNuB6Aaz2");
}

#[test]
fn given_empty_uid_when_new_then_invalid_uid() {
    let result = UserIdentity::new("");

    assert!(matches!(result, Err(CoreError::InvalidUid { .. })));
}

#[test]
fn given_uid_at_max_length_when_new_then_ok() {
    let uid = "a".repeat(MAX_UID_LENGTH);

    assert!(UserIdentity::new(uid).is_ok());
}

#[test]
fn given_uid_over_max_length_when_new_then_invalid_uid() {
    let uid = "a".repeat(MAX_UID_LENGTH + 1);

    let result = UserIdentity::new(uid);

    assert!(matches!(result, Err(CoreError::InvalidUid { .. })));
}

#[test]
fn test_from_str_matches_new() {
    assert_eq!(
        UserIdentity::from_str("u123").unwrap(),
        UserIdentity::new("u123").unwrap()
    );
    assert!(UserIdentity::from_str("").is_err());
}
