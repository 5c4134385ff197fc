//! Epoch-millisecond helpers.
//!
//! The API speaks Unix milliseconds everywhere (`start`, `end`, `time`,
//! `timestamp`); these helpers keep the conversions in one place.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Current wall-clock time as Unix milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// `now - window`, in Unix milliseconds.
pub fn ms_before_now(window: Duration) -> i64 {
    now_ms().saturating_sub(window.as_millis().min(i64::MAX as u128) as i64)
}

/// Converts Unix milliseconds to a UTC datetime, if representable.
pub fn datetime_from_ms(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}
