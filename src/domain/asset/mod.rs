//! Asset domain: ranked assets with validated market statistics.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{AssetId, DecimalStr};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A validated asset.
///
/// Numeric fields keep the server's decimal text; serializing an `Asset`
/// produces the same field names and string values the API sent. A nullable
/// field the server left out re-encodes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub rank: DecimalStr,
    pub symbol: String,
    pub name: String,
    pub supply: DecimalStr,
    #[serde(rename = "maxSupply")]
    pub max_supply: Option<DecimalStr>,
    #[serde(rename = "marketCapUsd")]
    pub market_cap_usd: DecimalStr,
    #[serde(rename = "volumeUsd24Hr")]
    pub volume_usd_24h: DecimalStr,
    #[serde(rename = "priceUsd")]
    pub price_usd: DecimalStr,
    #[serde(rename = "changePercent24Hr")]
    pub change_percent_24h: Option<DecimalStr>,
    #[serde(rename = "vwap24Hr")]
    pub vwap_24h: Option<DecimalStr>,
    pub explorer: Option<String>,
}

impl Asset {
    /// Rank as an integer position (1 = largest market cap).
    pub fn rank_position(&self) -> u32 {
        self.rank
            .value()
            .and_then(|rank| rank.to_u32())
            .unwrap_or(u32::MAX)
    }

    /// `"Bitcoin (BTC)"`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }

    pub fn price(&self) -> f64 {
        self.price_usd.to_f64()
    }
}

pub(crate) fn symbol_matches(candidate: &str, upper_query: &str) -> bool {
    candidate.to_uppercase() == upper_query
}

/// One page of ranked assets, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPage {
    #[serde(rename = "data")]
    pub assets: Vec<Asset>,
    /// Server time of the snapshot (Unix ms).
    pub timestamp: i64,
}

impl AssetPage {
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }
}

impl IntoIterator for AssetPage {
    type Item = Asset;
    type IntoIter = std::vec::IntoIter<Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.into_iter()
    }
}
