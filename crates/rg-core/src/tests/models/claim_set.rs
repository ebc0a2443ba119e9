use crate::{ClaimSet, CoreError, MAX_CLAIMS_PAYLOAD_LENGTH};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};
use serde_json::json;

#[test]
fn given_role_claim_when_to_payload_then_exact_json() {
    let claims = ClaimSet::role("admin");

    let payload = claims.to_payload().unwrap();

    assert_that!(payload.as_str(), eq(r#"{"role":"admin"}"#));
}

#[test]
fn given_claims_inserted_out_of_order_when_to_payload_then_keys_sorted() {
    let claims = ClaimSet::new().with("tier", "gold").with("role", "admin");

    let payload = claims.to_payload().unwrap();

    assert_that!(payload.as_str(), eq(r#"{"role":"admin","tier":"gold"}"#));
}

#[test]
fn given_reserved_claim_when_validate_then_forbidden_claim() {
    let claims = ClaimSet::role("admin").with("sub", "someone-else");

    let result = claims.validate();

    match result {
        Err(CoreError::ForbiddenClaim { claim, .. }) => assert_eq!(claim, "sub"),
        other => panic!("expected ForbiddenClaim, got {:?}", other),
    }
}

#[test]
fn given_firebase_claim_when_to_payload_then_error() {
    let claims = ClaimSet::new().with("firebase", json!({"tenant": "x"}));

    assert!(claims.to_payload().is_err());
}

#[test]
fn given_oversized_claims_when_validate_then_claims_too_large() {
    let claims = ClaimSet::new().with("blob", "x".repeat(MAX_CLAIMS_PAYLOAD_LENGTH));

    let result = claims.validate();

    assert!(matches!(result, Err(CoreError::ClaimsTooLarge { .. })));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("maximum payload size exceeded"));
}

#[test]
fn given_astral_characters_when_validate_then_counted_as_utf16_units() {
    // {"blob":"<emoji...>"}: 11 framing characters, 2 code units per emoji
    let at_limit = ClaimSet::new().with("blob", "\u{1F600}".repeat(494));
    let over_limit = ClaimSet::new().with("blob", "\u{1F600}".repeat(495));

    assert!(at_limit.validate().is_ok());
    assert!(matches!(
        over_limit.validate(),
        Err(CoreError::ClaimsTooLarge { size: 1001, .. })
    ));
}

#[test]
fn given_ascii_claims_at_limit_when_validate_then_ok() {
    let claims = ClaimSet::new().with("blob", "x".repeat(MAX_CLAIMS_PAYLOAD_LENGTH - 11));

    assert_that!(claims.to_payload().unwrap().len(), eq(MAX_CLAIMS_PAYLOAD_LENGTH));
    assert!(claims.validate().is_ok());
}

#[test]
fn given_empty_claims_when_validate_then_ok_but_validate_grant_fails() {
    let claims = ClaimSet::new();

    assert!(claims.validate().is_ok());
    assert!(matches!(
        claims.validate_grant(),
        Err(CoreError::EmptyClaims { .. })
    ));
    assert_eq!(claims.to_payload().unwrap(), "{}");
}

#[test]
fn given_existing_claims_when_merged_then_overlay_wins_and_others_kept() {
    let existing = ClaimSet::new().with("role", "viewer").with("tier", "gold");
    let overlay = ClaimSet::role("admin");

    let merged = existing.merged_with(&overlay);

    assert_eq!(merged.role_name(), Some("admin"));
    assert_eq!(merged.get("tier"), Some(&json!("gold")));
    assert_eq!(merged.len(), 2);
}

#[test]
fn given_blank_payload_when_from_payload_then_empty_set() {
    assert!(ClaimSet::from_payload("").unwrap().is_empty());
    assert!(ClaimSet::from_payload("  ").unwrap().is_empty());
    assert!(ClaimSet::from_payload("null").unwrap().is_empty());
}

#[test]
fn given_object_payload_when_from_payload_then_values_preserved() {
    let claims = ClaimSet::from_payload(r#"{"role":"admin","beta":true}"#).unwrap();

    assert_eq!(claims.role_name(), Some("admin"));
    assert_eq!(claims.get("beta"), Some(&json!(true)));
}

#[test]
fn given_non_object_payload_when_from_payload_then_invalid_claims() {
    let result = ClaimSet::from_payload("[1,2,3]");

    assert!(matches!(result, Err(CoreError::InvalidClaims { .. })));
}

#[test]
fn given_non_string_role_when_role_name_then_none() {
    let claims = ClaimSet::new().with("role", 7_i64);

    assert_eq!(claims.role_name(), None);
}

#[test]
fn test_display_renders_json() {
    assert_eq!(ClaimSet::role("admin").to_string(), r#"{"role":"admin"}"#);
}
