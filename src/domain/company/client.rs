//! Company sub-client.

use crate::client::BourseClient;

use super::Company;

pub struct Companies<'a> {
    pub(crate) client: &'a BourseClient,
}

impl Companies<'_> {
    /// All listed companies.
    pub async fn list(&self) -> Vec<Company> {
        self.client.fetch.fetch_many("/api/companies").await
    }

    /// A company by id.
    pub async fn get(&self, id: &str) -> Option<Company> {
        let path = format!("/api/companies/{}", urlencoding::encode(id));
        self.client.fetch.fetch_one(&path).await
    }

    /// Companies whose name matches the query.
    pub async fn search(&self, name: &str) -> Vec<Company> {
        let path = format!("/api/companies/search?name={}", urlencoding::encode(name));
        self.client.fetch.fetch_many(&path).await
    }
}
