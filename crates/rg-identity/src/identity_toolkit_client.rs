use crate::{
    IdentityError, IdentityService, Result as IdentityErrorResult, USER_NOT_FOUND,
    api_error_body::ApiErrorBody,
};

use rg_auth::TokenSource;
use rg_core::{ClaimSet, UserIdentity};

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetAccountInfoRequest<'a> {
    local_id: &'a str,
    custom_attributes: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    local_id: [&'a str; 1],
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<UserRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(default)]
    custom_attributes: Option<String>,
}

/// Identity Toolkit (Firebase Authentication) admin REST client
pub struct IdentityToolkitClient {
    pub base_url: String,
    pub project_id: String,
    pub tenant_id: Option<String>,
    tokens: Arc<dyn TokenSource>,
    client: ReqwestClient,
}

impl IdentityToolkitClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://identitytoolkit.googleapis.com")
    /// * `project_id` - Project owning the user pool
    /// * `tokens` - Source of bearer tokens for every request
    pub fn new(base_url: &str, project_id: &str, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            tenant_id: None,
            tokens,
            client: ReqwestClient::new(),
        }
    }

    /// Scope all requests to a tenant of a multi-tenant project
    pub fn with_tenant(mut self, tenant_id: Option<&str>) -> Self {
        self.tenant_id = tenant_id.map(String::from);
        self
    }

    /// URL of an `accounts:<action>` endpoint
    pub fn accounts_url(&self, action: &str) -> String {
        match &self.tenant_id {
            Some(tenant_id) => format!(
                "{}/v1/projects/{}/tenants/{}/accounts:{}",
                self.base_url, self.project_id, tenant_id, action
            ),
            None => format!(
                "{}/v1/projects/{}/accounts:{}",
                self.base_url, self.project_id, action
            ),
        }
    }

    /// Authenticate, POST the body, and classify any error response
    async fn post<B: Serialize + Sync>(
        &self,
        uid: &UserIdentity,
        action: &str,
        body: &B,
    ) -> IdentityErrorResult<String> {
        // No token, no request
        let token = self
            .tokens
            .access_token()
            .await
            .map_err(IdentityError::credential)?;

        let url = self.accounts_url(action);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) => IdentityError::from_api(status, &body.error, uid.as_str()),
                Err(_) => IdentityError::from_status(status, &text),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl IdentityService for IdentityToolkitClient {
    async fn set_custom_claims(
        &self,
        uid: &UserIdentity,
        claims: &ClaimSet,
    ) -> IdentityErrorResult<()> {
        let payload = claims.to_payload()?;

        let body = SetAccountInfoRequest {
            local_id: uid.as_str(),
            custom_attributes: &payload,
        };

        let response = self.post(uid, "update", &body).await?;
        // Only the status matters, but a garbled body means we talked to the wrong thing
        serde_json::from_str::<Value>(&response)?;

        Ok(())
    }

    async fn custom_claims(&self, uid: &UserIdentity) -> IdentityErrorResult<ClaimSet> {
        let body = LookupRequest {
            local_id: [uid.as_str()],
        };

        let response = self.post(uid, "lookup", &body).await?;
        let lookup: LookupResponse = serde_json::from_str(&response)?;

        let user = lookup
            .users
            .into_iter()
            .next()
            .ok_or_else(|| IdentityError::invalid_identity(uid.as_str(), USER_NOT_FOUND))?;

        let claims = ClaimSet::from_payload(user.custom_attributes.as_deref().unwrap_or(""))?;
        Ok(claims)
    }
}
