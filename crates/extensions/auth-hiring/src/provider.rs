//! Hiring auth provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use hirewatch_protocols::error::TokenError;
use hirewatch_protocols::provider::TokenSource;
use hirewatch_protocols::types::SessionToken;

use crate::api::TokenResponse;

const DEFAULT_API_URL: &str = "https://auth.hiring.amazon.com/api/csrf";
const DEFAULT_COUNTRY_CODE: &str = "US";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches the unauthenticated session token.
pub struct HiringAuthProvider {
    api_url: String,
    country_code: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HiringAuthProvider {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL.to_string())
    }

    /// Create provider against a custom endpoint.
    pub fn with_url(api_url: String) -> Self {
        Self {
            api_url,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn map_send_error(&self, e: reqwest::Error) -> TokenError {
        if e.is_timeout() {
            TokenError::Timeout(self.timeout_secs)
        } else {
            TokenError::Network(e.to_string())
        }
    }
}

impl Default for HiringAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenSource for HiringAuthProvider {
    fn id(&self) -> &str {
        "hiring-auth"
    }

    async fn fetch_session_token(&self) -> Result<SessionToken, TokenError> {
        debug!("Retrieving session token from {}", self.api_url);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("countryCode", self.country_code.as_str())])
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        debug!("Auth response status: {}", status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TokenError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| TokenError::MalformedBody(e.to_string()))?;

        if parsed.token.is_empty() {
            return Err(TokenError::MalformedBody("token is empty".to_string()));
        }

        Ok(SessionToken::new(parsed.token))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
