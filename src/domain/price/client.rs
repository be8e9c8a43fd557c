//! Price sub-client.

use crate::client::BourseClient;

use super::PriceSpread;

pub struct Prices<'a> {
    pub(crate) client: &'a BourseClient,
}

impl Prices<'_> {
    /// Spreads for every quoted security.
    pub async fn list(&self) -> Vec<PriceSpread> {
        self.client.fetch.fetch_many("/api/pricespreads").await
    }

    /// The spread for one security.
    pub async fn get(&self, security_identifier: &str) -> Option<PriceSpread> {
        let path = format!(
            "/api/pricespreads/{}",
            urlencoding::encode(security_identifier)
        );
        self.client.fetch.fetch_one(&path).await
    }
}
