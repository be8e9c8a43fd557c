//! Bond sub-client.

use crate::client::BourseClient;

use super::Bond;

pub struct Bonds<'a> {
    pub(crate) client: &'a BourseClient,
}

impl Bonds<'_> {
    /// All bonds on the exchange.
    pub async fn list(&self) -> Vec<Bond> {
        self.client.fetch.fetch_many("/api/bonds").await
    }

    /// A bond by id.
    pub async fn get(&self, id: &str) -> Option<Bond> {
        let path = format!("/api/bonds/{}", urlencoding::encode(id));
        self.client.fetch.fetch_one(&path).await
    }
}
