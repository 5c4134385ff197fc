//! Wire types for asset responses (REST).
//!
//! Every numeric field arrives as a decimal string and is kept verbatim here;
//! validation happens in the `TryFrom` conversion to [`super::Asset`].
//!
//! Nullable fields accept both an explicit `null` and an absent key; both
//! decode to `None` and re-encode as `null`.

use serde::{Deserialize, Serialize};

/// Raw asset record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetResponse {
    pub id: String,
    #[serde(default)]
    pub rank: Option<String>,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub supply: Option<String>,
    #[serde(rename = "maxSupply", default)]
    pub max_supply: Option<String>,
    #[serde(rename = "marketCapUsd", default)]
    pub market_cap_usd: Option<String>,
    #[serde(rename = "volumeUsd24Hr", default)]
    pub volume_usd_24h: Option<String>,
    #[serde(rename = "priceUsd", default)]
    pub price_usd: Option<String>,
    #[serde(rename = "changePercent24Hr", default)]
    pub change_percent_24h: Option<String>,
    #[serde(rename = "vwap24Hr", default)]
    pub vwap_24h: Option<String>,
    #[serde(default)]
    pub explorer: Option<String>,
}

/// REST response for `GET /assets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsResponse {
    pub data: Vec<AssetResponse>,
    pub timestamp: i64,
}

/// REST response for `GET /assets/{id}`. `data` is `null` for unknown ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SingleAssetResponse {
    #[serde(default)]
    pub data: Option<AssetResponse>,
    pub timestamp: i64,
}
