//! High-level client — `BourseClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::Credentials;
use crate::codec::registry;
use crate::config::ApiConfig;
use crate::domain::account::client::Accounts;
use crate::domain::bond::client::Bonds;
use crate::domain::broker::client::Brokers;
use crate::domain::company::client::Companies;
use crate::domain::order::client::Orders;
use crate::domain::portfolio::client::Portfolios;
use crate::domain::price::client::Prices;
use crate::error::SdkError;
use crate::http::{FetchAdapter, HttpTransport};
use crate::network::DEFAULT_API_URL;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::bond::client::Bonds as BondsClient;
pub use crate::domain::broker::client::Brokers as BrokersClient;
pub use crate::domain::company::client::Companies as CompaniesClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::portfolio::client::Portfolios as PortfoliosClient;
pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point for the Bourse SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.companies()`, `client.orders()`, etc.
#[derive(Debug, Clone)]
pub struct BourseClient {
    pub(crate) fetch: FetchAdapter,
}

impl BourseClient {
    pub fn builder() -> BourseClientBuilder {
        BourseClientBuilder::default()
    }

    /// Build a client straight from a config.
    pub fn from_config(config: ApiConfig) -> Result<Self, SdkError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            fetch: FetchAdapter::new(transport, registry::global()),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        self.fetch.transport().config()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn companies(&self) -> Companies<'_> {
        Companies { client: self }
    }

    pub fn bonds(&self) -> Bonds<'_> {
        Bonds { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn portfolios(&self) -> Portfolios<'_> {
        Portfolios { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn brokers(&self) -> Brokers<'_> {
        Brokers { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BourseClientBuilder {
    base_url: String,
    auth_token: Option<String>,
    partner_id: Option<String>,
    timeout: Option<Duration>,
}

impl Default for BourseClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            partner_id: None,
            timeout: None,
        }
    }
}

impl BourseClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Adopt the token and partner id returned by [`auth::login`](crate::auth::login).
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.auth_token = Some(credentials.token);
        self.partner_id = credentials.partner_id;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<BourseClient, SdkError> {
        let mut config = ApiConfig::new(self.base_url);
        if let Some(token) = self.auth_token {
            config = config.with_auth_token(token);
        }
        if let Some(partner_id) = self.partner_id {
            config = config.with_partner_id(partner_id);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        BourseClient::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = BourseClient::builder().build().unwrap();
        assert_eq!(client.config().base_url(), DEFAULT_API_URL);
        assert!(client.config().auth_token().is_none());
    }

    #[test]
    fn test_builder_credentials() {
        let client = BourseClient::builder()
            .base_url("https://staging.bourse-game.de/")
            .credentials(Credentials {
                token: "t-1".to_string(),
                partner_id: Some("p-1".to_string()),
            })
            .build()
            .unwrap();

        assert_eq!(client.config().base_url(), "https://staging.bourse-game.de");
        assert_eq!(client.config().auth_token(), Some("t-1"));
        assert_eq!(client.config().partner_id(), Some("p-1"));
    }
}
