
use crate::ServiceAccountKey;

pub(crate) const TEST_PRIVATE_KEY: &str = include_str!("fixtures/test_private_key.pem");
pub(crate) const TEST_PUBLIC_KEY: &str = include_str!("fixtures/test_public_key.pem");
pub(crate) const TEST_CLIENT_EMAIL: &str = "grant-admin@demo-project.iam.gserviceaccount.com";

/// Key file JSON pointing at the given token endpoint
pub(crate) fn key_json(token_uri: &str) -> String {
    serde_json::json!({
        "type": "service_account",
        "project_id": "demo-project",
        "private_key_id": "key-1",
        "private_key": TEST_PRIVATE_KEY,
        "client_email": TEST_CLIENT_EMAIL,
        "client_id": "1234567890",
        "token_uri": token_uri,
    })
    .to_string()
}

pub(crate) fn test_key(token_uri: &str) -> ServiceAccountKey {
    ServiceAccountKey::from_json(&key_json(token_uri)).unwrap()
}
