use serde::Deserialize;

/// Error envelope returned by Google REST APIs
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// Canonical status such as `PERMISSION_DENIED`
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorDetail {
    /// Machine-readable code.
    ///
    /// Identity Toolkit puts it at the front of `message` (`"INVALID_CLAIMS : detail"`);
    /// other failures only carry a canonical `status`.
    pub fn error_code(&self) -> String {
        let head = self.message.split(" : ").next().unwrap_or("").trim();

        let is_code = !head.is_empty()
            && head
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

        if is_code {
            head.to_string()
        } else if let Some(status) = &self.status {
            status.clone()
        } else {
            self.code.to_string()
        }
    }
}
