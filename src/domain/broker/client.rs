//! Broker sub-client.

use crate::client::BourseClient;

use super::Broker;

pub struct Brokers<'a> {
    pub(crate) client: &'a BourseClient,
}

impl Brokers<'_> {
    /// All registered brokers.
    pub async fn list(&self) -> Vec<Broker> {
        self.client.fetch.fetch_many("/api/brokers").await
    }

    /// A broker by id.
    pub async fn get(&self, id: &str) -> Option<Broker> {
        let path = format!("/api/brokers/{}", urlencoding::encode(id));
        self.client.fetch.fetch_one(&path).await
    }
}
