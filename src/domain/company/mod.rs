//! Company domain — listed companies and their accounts.

#[cfg(feature = "http")]
pub mod client;
mod wire;

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};

use crate::codec::Wrapped;

/// A company listed on the exchange.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: Wrapped<String>,
    pub name: Wrapped<String>,
    /// Securities account the company trades out of.
    pub securities_account_id: Wrapped<String>,
    /// Bank account the company settles against.
    pub bank_account_id: Wrapped<String>,
    pub listed_since: Wrapped<DateTime<Local>>,
}

impl Company {
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }
}

impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Company {}

impl Hash for Company {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
