use crate::TOKEN_REFRESH_SKEW_SECS;

/// OAuth2 bearer token with its absolute expiry (Unix seconds)
#[derive(Clone)]
pub struct AccessToken {
    token: String,
    expires_at: i64,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Usable at `now` with the refresh skew applied
    pub fn is_fresh(&self, now: i64) -> bool {
        now + TOKEN_REFRESH_SKEW_SECS < self.expires_at
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
