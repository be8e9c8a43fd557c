//! Portfolio sub-client.

use crate::client::BourseClient;

use super::Portfolio;

pub struct Portfolios<'a> {
    pub(crate) client: &'a BourseClient,
}

impl Portfolios<'_> {
    /// The portfolio of a securities account.
    pub async fn of_account(&self, securities_account_id: &str) -> Option<Portfolio> {
        let path = format!(
            "/api/securitiesaccounts/{}/portfolio",
            urlencoding::encode(securities_account_id)
        );
        self.client.fetch.fetch_one(&path).await
    }
}
