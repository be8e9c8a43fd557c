//! Broker domain — designated sponsors and their licenses.

#[cfg(feature = "http")]
pub mod client;
mod wire;

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::codec::Wrapped;
use crate::shared::serde_util;

/// The license a broker operates under.
///
/// Travels as a nested object behind a delegating wrapper, so the base
/// serializer types it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerLicense {
    #[serde(default)]
    pub id: Wrapped<String>,
    #[serde(default, with = "serde_util::epoch_millis")]
    pub issued: Wrapped<DateTime<Local>>,
    #[serde(default)]
    pub partner_id: Wrapped<String>,
}

impl PartialEq for BrokerLicense {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BrokerLicense {}

impl Hash for BrokerLicense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A broker registered with the exchange.
#[derive(Debug, Clone)]
pub struct Broker {
    pub id: Wrapped<String>,
    pub name: Wrapped<String>,
    /// Player that owns the brokerage.
    pub owner_id: Wrapped<String>,
    pub license: Wrapped<BrokerLicense>,
}

impl PartialEq for Broker {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Broker {}

impl Hash for Broker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
