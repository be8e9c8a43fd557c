//! Portfolio domain — holdings of a securities account.

#[cfg(feature = "http")]
pub mod client;
mod wire;

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::codec::Wrapped;
use crate::domain::order::SecurityKind;

/// One holding inside a portfolio.
///
/// Positions travel as list elements, so the base serializer types them
/// directly; wrapped fields still decode null ⇄ empty through the
/// transparent container impls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub security_identifier: Wrapped<String>,
    #[serde(default, rename = "securityType")]
    pub kind: Wrapped<SecurityKind>,
    #[serde(default)]
    pub amount: Wrapped<i64>,
}

/// The holdings of one securities account.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub id: Wrapped<String>,
    pub positions: Wrapped<Vec<Position>>,
}

impl Portfolio {
    /// Positions as a slice; a portfolio always iterates, even when the
    /// backend sent nothing.
    pub fn positions(&self) -> &[Position] {
        self.positions.get().map_or(&[], Vec::as_slice)
    }
}

impl PartialEq for Portfolio {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Portfolio {}

impl Hash for Portfolio {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
