//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod time;

use crate::error::DecodeError;
use rust_decimal::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Newtype for asset identifiers (e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── DecimalStr ──────────────────────────────────────────────────────────────

/// A numeric field the API encodes as a decimal string.
///
/// Keeps the exact server text next to the parsed value, so re-encoding
/// never leaks a rounded representation back into the payload. Any finite
/// number is accepted; `value` is `None` when it does not fit a `Decimal`
/// (magnitudes beyond about 7.9e28).
#[derive(Debug, Clone)]
pub struct DecimalStr {
    raw: String,
    value: Option<Decimal>,
    approx: f64,
}

impl DecimalStr {
    /// Parse a decimal string, naming `field` in the error.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, DecodeError> {
        let trimmed = raw.trim();
        let approx = trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DecodeError::InvalidNumber {
                field,
                value: raw.to_string(),
            })?;
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok();

        Ok(Self {
            raw: raw.to_string(),
            value,
            approx,
        })
    }

    /// The original server text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Exact value, when it fits a `Decimal`.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Lossy conversion for display math.
    pub fn to_f64(&self) -> f64 {
        self.approx
    }
}

impl PartialEq for DecimalStr {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for DecimalStr {}

impl std::fmt::Display for DecimalStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for DecimalStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for DecimalStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DecimalStr::parse("decimal", &s).map_err(serde::de::Error::custom)
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Price history sampling interval.
///
/// The variant set is the full catalog the API accepts; the wire codes are
/// exact and must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "m1")]
    Minute1,
    #[serde(rename = "m5")]
    Minute5,
    #[serde(rename = "m15")]
    Minute15,
    #[serde(rename = "m30")]
    Minute30,
    #[serde(rename = "h1")]
    Hour1,
    #[serde(rename = "h2")]
    Hour2,
    #[serde(rename = "h6")]
    Hour6,
    #[serde(rename = "h12")]
    Hour12,
    #[serde(rename = "d1")]
    Day1,
}

impl Interval {
    /// Every interval, shortest first.
    pub const ALL: [Interval; 9] = [
        Self::Minute1,
        Self::Minute5,
        Self::Minute15,
        Self::Minute30,
        Self::Hour1,
        Self::Hour2,
        Self::Hour6,
        Self::Hour12,
        Self::Day1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "m1",
            Self::Minute5 => "m5",
            Self::Minute15 => "m15",
            Self::Minute30 => "m30",
            Self::Hour1 => "h1",
            Self::Hour2 => "h2",
            Self::Hour6 => "h6",
            Self::Hour12 => "h12",
            Self::Day1 => "d1",
        }
    }

    /// Bucket width in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Minute30 => 1_800,
            Self::Hour1 => 3_600,
            Self::Hour2 => 7_200,
            Self::Hour6 => 21_600,
            Self::Hour12 => 43_200,
            Self::Day1 => 86_400,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.seconds())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == code)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            let codes: Vec<&str> = Self::ALL.iter().map(|i| i.as_str()).collect();
            format!("unknown interval `{}` (expected one of {})", s, codes.join(", "))
        })
    }
}
