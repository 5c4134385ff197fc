//! Conversion: AssetResponse → Asset (TryFrom + validation).
//!
//! All-or-nothing: one bad numeric field fails the record, one bad record
//! fails the page.

use super::wire;
use super::{Asset, AssetPage};
use crate::error::DecodeError;
use crate::shared::DecimalStr;

fn required(field: &'static str, value: Option<String>) -> Result<DecimalStr, DecodeError> {
    let raw = value.ok_or(DecodeError::MissingField(field))?;
    DecimalStr::parse(field, &raw)
}

fn optional(field: &'static str, value: Option<String>) -> Result<Option<DecimalStr>, DecodeError> {
    value.map(|raw| DecimalStr::parse(field, &raw)).transpose()
}

impl TryFrom<wire::AssetResponse> for Asset {
    type Error = DecodeError;

    fn try_from(source: wire::AssetResponse) -> Result<Self, Self::Error> {
        let id = source.id;
        let build = || -> Result<Asset, DecodeError> {
            Ok(Asset {
                id: id.as_str().into(),
                rank: required("rank", source.rank)?,
                symbol: source.symbol,
                name: source.name,
                supply: required("supply", source.supply)?,
                max_supply: optional("maxSupply", source.max_supply)?,
                market_cap_usd: required("marketCapUsd", source.market_cap_usd)?,
                volume_usd_24h: required("volumeUsd24Hr", source.volume_usd_24h)?,
                price_usd: required("priceUsd", source.price_usd)?,
                change_percent_24h: optional("changePercent24Hr", source.change_percent_24h)?,
                vwap_24h: optional("vwap24Hr", source.vwap_24h)?,
                explorer: source.explorer,
            })
        };
        build().map_err(|e| e.for_asset(id.as_str()))
    }
}

impl TryFrom<wire::AssetsResponse> for AssetPage {
    type Error = DecodeError;

    fn try_from(source: wire::AssetsResponse) -> Result<Self, Self::Error> {
        let assets = source
            .data
            .into_iter()
            .map(Asset::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssetPage {
            assets,
            timestamp: source.timestamp,
        })
    }
}
