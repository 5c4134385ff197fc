//! Conversion: HistoryResponse → HistorySeries.

use super::wire::{HistoryPointResponse, HistoryResponse};
use super::{HistoryRequest, HistorySeries, PriceSample};
use crate::error::{DecodeError, SdkError};

impl TryFrom<&HistoryPointResponse> for PriceSample {
    type Error = DecodeError;

    fn try_from(point: &HistoryPointResponse) -> Result<Self, Self::Error> {
        let price = point
            .price_usd
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| DecodeError::InvalidNumber {
                field: "priceUsd",
                value: point.price_usd.clone(),
            })?;

        Ok(PriceSample {
            time: point.time,
            price,
        })
    }
}

impl TryFrom<(HistoryResponse, HistoryRequest)> for HistorySeries {
    type Error = SdkError;

    fn try_from((resp, request): (HistoryResponse, HistoryRequest)) -> Result<Self, Self::Error> {
        let samples = resp
            .data
            .iter()
            .map(PriceSample::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1].time < pair[0].time)
        {
            return Err(DecodeError::UnorderedSamples { index: index + 1 }.into());
        }

        let start = match samples.first() {
            Some(first) => first.time,
            None => {
                return Err(SdkError::EmptySeries {
                    asset_id: request.asset_id.to_string(),
                    interval: request.interval,
                })
            }
        };

        Ok(HistorySeries {
            asset_id: request.asset_id,
            interval: request.interval,
            start,
            requested_start: request.start,
            end: request.end,
            samples,
        })
    }
}
