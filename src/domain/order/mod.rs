//! Order domain — placing and querying exchange orders.

#[cfg(feature = "http")]
pub mod client;
mod wire;

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::codec::Wrapped;

#[cfg(feature = "http")]
pub use client::PlaceOrderRequest;

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Execution style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderKind {
    Limit,
    Market,
}

/// What kind of security an order refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecurityKind {
    Stock,
    Bond,
}

/// An order on an exchange orderbook.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Wrapped<String>,
    pub security_identifier: Wrapped<String>,
    pub side: Wrapped<OrderSide>,
    pub kind: Wrapped<OrderKind>,
    pub security_kind: Wrapped<SecurityKind>,
    /// Limit price; empty for market orders.
    pub limit: Wrapped<f64>,
    pub size: Wrapped<i64>,
    pub executed_size: Wrapped<i64>,
    pub created: Wrapped<DateTime<Local>>,
    /// Securities account the order belongs to.
    pub owner_id: Wrapped<String>,
}

impl Order {
    /// Size still open on the book.
    pub fn open_size(&self) -> Option<i64> {
        match (self.size.get(), self.executed_size.get()) {
            (Some(size), Some(executed)) => Some(size - executed),
            _ => None,
        }
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
