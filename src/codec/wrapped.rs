//! `Wrapped<T>` — the uniform container for a possibly-absent wire value.
//!
//! Absence (wire `null` or a missing key) is an explicit empty state; the
//! container itself always exists. Equality compares unwrapped values and
//! treats empty as its own comparable state — it is never collapsed into
//! zero/false/empty-string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wire field that may or may not hold a `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wrapped<T>(Option<T>);

impl<T> Wrapped<T> {
    /// A container holding `value`.
    pub fn present(value: T) -> Self {
        Self(Some(value))
    }

    /// The explicit no-value state.
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the held value, if any.
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }

    /// Map the held value, preserving emptiness.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Wrapped<U> {
        Wrapped(self.0.map(f))
    }

    /// Map the held value through a partial function; a `None` result
    /// empties the container.
    pub fn filter_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Wrapped<U> {
        Wrapped(self.0.and_then(f))
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    pub fn as_ref(&self) -> Wrapped<&T> {
        Wrapped(self.0.as_ref())
    }
}

impl<T: Clone> Wrapped<&T> {
    pub fn cloned(self) -> Wrapped<T> {
        Wrapped(self.0.cloned())
    }
}

impl<T> Default for Wrapped<T> {
    /// The empty state.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Wrapped<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Wrapped<T>> for Option<T> {
    fn from(value: Wrapped<T>) -> Self {
        value.0
    }
}

impl<T> From<T> for Wrapped<T> {
    fn from(value: T) -> Self {
        Self::present(value)
    }
}

// Serialization-transparent: a present value serializes as itself, the empty
// state as JSON null, so serde-native entities holding wrapped fields match
// the wire format without further annotation.

impl<T: Serialize> Serialize for Wrapped<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Wrapped<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(Option::<T>::deserialize(deserializer)?))
    }
}
