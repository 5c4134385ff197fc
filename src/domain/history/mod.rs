//! Price history domain: sampled price series for one asset and window.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::time::datetime_from_ms;
use crate::shared::{AssetId, Interval};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single data point on a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Unix timestamp in milliseconds.
    pub time: i64,
    /// Price in USD.
    pub price: f64,
}

impl PriceSample {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        datetime_from_ms(self.time)
    }
}

/// The window a history request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub asset_id: AssetId,
    pub interval: Interval,
    /// Requested start, Unix ms.
    pub start: i64,
    /// Requested end, Unix ms.
    pub end: i64,
}

/// A non-empty, time-ascending price series.
///
/// `start` is the time of the first sample the server returned, which may
/// differ from the requested start because the server aligns to buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySeries {
    pub asset_id: AssetId,
    pub interval: Interval,
    pub start: i64,
    pub requested_start: i64,
    pub end: i64,
    pub samples: Vec<PriceSample>,
}

impl HistorySeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.price).collect()
    }

    pub fn first(&self) -> Option<&PriceSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&PriceSample> {
        self.samples.last()
    }

    pub fn min_price(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.price).reduce(f64::min)
    }

    pub fn max_price(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.price).reduce(f64::max)
    }

    /// Percent change from the first to the last sample.
    pub fn change_percent(&self) -> Option<f64> {
        let first = self.first()?.price;
        let last = self.last()?.price;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}
