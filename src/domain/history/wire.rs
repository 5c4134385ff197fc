//! Wire types for price history (REST).

use serde::{Deserialize, Serialize};

/// A single price point from the backend.
///
/// An absent `circulatingSupply` or `date` re-encodes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPointResponse {
    #[serde(rename = "priceUsd")]
    pub price_usd: String,
    /// Bucket start, Unix milliseconds.
    pub time: i64,
    #[serde(rename = "circulatingSupply", default)]
    pub circulating_supply: Option<String>,
    /// ISO-8601 rendering of `time`.
    #[serde(default)]
    pub date: Option<String>,
}

/// REST response for `GET /assets/{id}/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub data: Vec<HistoryPointResponse>,
    pub timestamp: i64,
}
