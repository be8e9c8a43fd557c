//! Bank account sub-client.

use crate::client::BourseClient;

use super::BankAccount;

pub struct Accounts<'a> {
    pub(crate) client: &'a BourseClient,
}

impl Accounts<'_> {
    /// The bank account of the authenticated player.
    pub async fn own(&self) -> Option<BankAccount> {
        self.client.fetch.fetch_one("/api/bankaccounts").await
    }

    /// A bank account by id.
    pub async fn get(&self, id: &str) -> Option<BankAccount> {
        let path = format!("/api/bankaccounts/{}", urlencoding::encode(id));
        self.client.fetch.fetch_one(&path).await
    }
}
