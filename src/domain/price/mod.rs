//! Price domain — current bid/ask spreads per security.

#[cfg(feature = "http")]
pub mod client;
mod wire;

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};

use crate::codec::Wrapped;

/// Best bid and ask for one security.
#[derive(Debug, Clone)]
pub struct PriceSpread {
    /// The security this spread belongs to — also its identity on the wire.
    pub security_identifier: Wrapped<String>,
    pub bid_price: Wrapped<f64>,
    pub bid_size: Wrapped<i64>,
    pub ask_price: Wrapped<f64>,
    pub ask_size: Wrapped<i64>,
    pub date: Wrapped<DateTime<Local>>,
}

impl PriceSpread {
    /// Absolute spread, when both sides are quoted.
    pub fn spread(&self) -> Option<f64> {
        match (self.ask_price.get(), self.bid_price.get()) {
            (Some(ask), Some(bid)) => Some(ask - bid),
            _ => None,
        }
    }
}

impl PartialEq for PriceSpread {
    fn eq(&self, other: &Self) -> bool {
        self.security_identifier == other.security_identifier
    }
}

impl Eq for PriceSpread {}

impl Hash for PriceSpread {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.security_identifier.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_needs_both_sides() {
        let spread = PriceSpread {
            security_identifier: Wrapped::present("DE000A1EXCH9".to_string()),
            bid_price: Wrapped::present(100.0),
            bid_size: Wrapped::empty(),
            ask_price: Wrapped::empty(),
            ask_size: Wrapped::empty(),
            date: Wrapped::empty(),
        };
        assert_eq!(spread.spread(), None);
    }
}
