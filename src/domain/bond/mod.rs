//! Bond domain — fixed-interest securities issued by companies.

#[cfg(feature = "http")]
pub mod client;
mod wire;

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};

use crate::codec::Wrapped;

/// A bond tradeable on the exchange.
#[derive(Debug, Clone)]
pub struct Bond {
    pub id: Wrapped<String>,
    pub name: Wrapped<String>,
    /// Id of the issuing company.
    pub issuer_id: Wrapped<String>,
    pub face_value: Wrapped<f64>,
    /// Annual interest rate as a fraction (0.05 = 5 %).
    pub interest_rate: Wrapped<f64>,
    pub issue_date: Wrapped<DateTime<Local>>,
    pub maturity_date: Wrapped<DateTime<Local>>,
    /// Number of certificates issued.
    pub volume: Wrapped<i64>,
}

impl PartialEq for Bond {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bond {}

impl Hash for Bond {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
