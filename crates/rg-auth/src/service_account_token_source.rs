use crate::{
    AccessToken, AuthError, DEFAULT_SCOPES, JWT_BEARER_GRANT_TYPE, Result as AuthErrorResult,
    ServiceAccountKey, TokenSource, summarize_body,
};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use tokio::sync::Mutex;

const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    DEFAULT_EXPIRES_IN_SECS
}

#[derive(Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Exchanges a signed service-account assertion for access tokens and caches the result
pub struct ServiceAccountTokenSource {
    key: ServiceAccountKey,
    scopes: Vec<String>,
    http: ReqwestClient,
    cached: Mutex<Option<AccessToken>>,
}

impl ServiceAccountTokenSource {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            http: ReqwestClient::new(),
            cached: Mutex::new(None),
        }
    }

    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn with_http_client(mut self, http: ReqwestClient) -> Self {
        self.http = http;
        self
    }

    pub fn key(&self) -> &ServiceAccountKey {
        &self.key
    }

    async fn exchange(&self, now: i64) -> AuthErrorResult<AccessToken> {
        let assertion = self.key.sign_assertion(&self.scopes, now)?;

        debug!(
            "Requesting access token for {} from {}",
            self.key.client_email, self.key.token_uri
        );

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(Self::http_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::http_error)?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => {
                    let message = err.error_description.unwrap_or_else(|| err.error.clone());
                    (err.error, message)
                }
                Err(_) => (status.as_u16().to_string(), summarize_body(&body)),
            };

            return Err(AuthError::TokenRejected {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::TokenResponse {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            "Access token obtained for {} (expires in {}s)",
            self.key.client_email, token.expires_in
        );

        Ok(AccessToken::new(
            token.access_token,
            now.saturating_add(token.expires_in),
        ))
    }

    #[track_caller]
    fn http_error(err: reqwest::Error) -> AuthError {
        AuthError::Http {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl TokenSource for ServiceAccountTokenSource {
    async fn access_token(&self) -> AuthErrorResult<AccessToken> {
        let mut cached = self.cached.lock().await;
        let now = chrono::Utc::now().timestamp();

        if let Some(token) = cached.as_ref()
            && token.is_fresh(now)
        {
            return Ok(token.clone());
        }

        let token = self.exchange(now).await?;
        *cached = Some(token.clone());
        Ok(token)
    }
}
