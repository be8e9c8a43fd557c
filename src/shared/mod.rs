//! Shared helpers used across the domain modules.

pub mod serde_util;

use chrono::{DateTime, Local, TimeZone};

/// Convert a wire timestamp (signed epoch milliseconds) into a local-zone
/// date/time.
///
/// The backend's timestamps are interpreted in the system timezone, not UTC
/// — kept for wire compatibility. Out-of-range values come back as `None`.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(millis).single()
}

/// Convert a local-zone date/time back into wire epoch milliseconds.
pub fn to_epoch_millis(timestamp: &DateTime<Local>) -> i64 {
    timestamp.timestamp_millis()
}
