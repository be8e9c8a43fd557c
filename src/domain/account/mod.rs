//! Bank account domain.

#[cfg(feature = "http")]
pub mod client;
mod wire;

use std::hash::{Hash, Hasher};

use crate::codec::Wrapped;

/// A player's bank account.
#[derive(Debug, Clone)]
pub struct BankAccount {
    pub id: Wrapped<String>,
    pub cash: Wrapped<f64>,
}

impl BankAccount {
    /// Current cash balance, if the backend sent one.
    pub fn cash(&self) -> Option<f64> {
        self.cash.get().copied()
    }
}

// Identity is the `id` field alone; balances change between fetches.
impl PartialEq for BankAccount {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BankAccount {}

impl Hash for BankAccount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(account: &BankAccount) -> u64 {
        let mut hasher = DefaultHasher::new();
        account.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identity_by_id_only() {
        let a = BankAccount {
            id: Wrapped::present("acc-1".to_string()),
            cash: Wrapped::present(100.0),
        };
        let b = BankAccount {
            id: Wrapped::present("acc-1".to_string()),
            cash: Wrapped::present(999.5),
        };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_different_ids_differ() {
        let a = BankAccount {
            id: Wrapped::present("acc-1".to_string()),
            cash: Wrapped::empty(),
        };
        let b = BankAccount {
            id: Wrapped::present("acc-2".to_string()),
            cash: Wrapped::empty(),
        };
        assert_ne!(a, b);
    }

    #[test]
    fn test_both_ids_empty_share_the_sentinel() {
        let a = BankAccount { id: Wrapped::empty(), cash: Wrapped::present(1.0) };
        let b = BankAccount { id: Wrapped::empty(), cash: Wrapped::present(2.0) };
        assert_eq!(a, b);
    }
}
