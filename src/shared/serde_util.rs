//! Custom serde helpers for backend wire formats.

/// (De)serializes a wrapped timestamp as epoch milliseconds.
///
/// The backend sends date fields as `i64` epoch millis (or `null`), never
/// ISO 8601 strings. Values outside chrono's representable range fail the
/// decode rather than silently clamping.
pub mod epoch_millis {
    use chrono::{DateTime, Local};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::codec::Wrapped;
    use crate::shared::{from_epoch_millis, to_epoch_millis};

    pub fn serialize<S>(value: &Wrapped<DateTime<Local>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.as_ref().map(to_epoch_millis).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Wrapped<DateTime<Local>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            None => Ok(Wrapped::empty()),
            Some(millis) => from_epoch_millis(millis)
                .map(Wrapped::present)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {millis}"))),
        }
    }
}
