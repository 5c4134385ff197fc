//! Price history sub-client: sampled series ending now.

use crate::client::CoinCapClient;
use crate::domain::history::{HistoryRequest, HistorySeries};
use crate::error::SdkError;
use crate::shared::time::{ms_before_now, now_ms};
use crate::shared::{AssetId, Interval};
use std::time::Duration;

const ONE_HOUR: Duration = Duration::from_secs(3_600);

/// Sub-client for price history operations.
pub struct History<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> History<'a> {
    /// Series from `start` (Unix ms) until now, sampled at `interval`.
    ///
    /// A `start` in the future yields [`SdkError::EmptySeries`].
    pub async fn get(
        &self,
        id: &str,
        interval: Interval,
        start: i64,
    ) -> Result<HistorySeries, SdkError> {
        self.get_between(id, interval, start, now_ms()).await
    }

    /// Series for an explicit `[start, end]` window (Unix ms).
    pub async fn get_between(
        &self,
        id: &str,
        interval: Interval,
        start: i64,
        end: i64,
    ) -> Result<HistorySeries, SdkError> {
        let resp = self
            .client
            .http
            .get_asset_history(id, interval, start, end)
            .await?;

        tracing::debug!(
            asset = id,
            interval = %interval,
            samples = resp.data.len(),
            "fetched price history"
        );

        HistorySeries::try_from((
            resp,
            HistoryRequest {
                asset_id: AssetId::from(id),
                interval,
                start,
                end,
            },
        ))
    }

    /// Series covering `window` back from now.
    pub async fn lookback(
        &self,
        id: &str,
        interval: Interval,
        window: Duration,
    ) -> Result<HistorySeries, SdkError> {
        self.get(id, interval, ms_before_now(window)).await
    }

    /// One-minute samples over the last hour.
    pub async fn last_hour(&self, id: &str) -> Result<HistorySeries, SdkError> {
        self.lookback(id, Interval::Minute1, ONE_HOUR).await
    }
}
