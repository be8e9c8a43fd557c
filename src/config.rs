//! Client configuration.
//!
//! `ApiConfig` is built once and injected into the transport constructor.
//! It is immutable after construction — requests read it, nothing writes it.

use std::time::Duration;

use crate::error::HttpError;
use crate::network::DEFAULT_API_URL;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable per-client configuration: base URL, auth token, partner id.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    auth_token: Option<String>,
    partner_id: Option<String>,
    timeout: Duration,
}

impl ApiConfig {
    /// Create a config with the given base URL and default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
            partner_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the bearer token for authenticated endpoints.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the partner id sent as `X-Partner-Id` on every request.
    pub fn with_partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn partner_id(&self) -> Option<&str> {
        self.partner_id.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate the config before a transport is built from it.
    pub fn validate(&self) -> Result<(), HttpError> {
        if self.base_url.is_empty() {
            return Err(HttpError::InvalidConfig("base URL cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
