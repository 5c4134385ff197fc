//! Dashboard rows: the hand-off to the terminal renderer.
//!
//! A row is four display strings: `"Name (SYM)"`, truncated price, compact
//! market cap, truncated 24h change. The table renderer here is a plain text
//! fallback; richer widget layers consume [`Snapshot::cells`] directly.

use crate::domain::asset::Asset;
use crate::domain::history::HistorySeries;
use crate::error::SdkError;
use crate::shared::fmt::{format_magnitude, format_percent, num, truncate_price, FormatError};
use crate::shared::AssetId;

/// Column titles for [`asset_row`].
pub const HEADERS: [&str; 4] = ["Name", "Price (USD)", "Market Cap", "24h %"];

/// One formatted table row.
pub type Row = [String; 4];

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Format one asset into the four display cells.
pub fn asset_row(asset: &Asset) -> Result<Row, FormatError> {
    let change = match &asset.change_percent_24h {
        Some(change) => format_percent(change.as_str())?,
        None => "-".to_string(),
    };

    Ok([
        asset.display_name(),
        truncate_price(asset.price_usd.as_str())?,
        format_magnitude(asset.market_cap_usd.as_str())?,
        change,
    ])
}

/// Placeholder for cells of a row that failed to format.
pub const UNFORMATTED: &str = "?";

/// A formatted row plus the data it came from.
///
/// Formatting and history failures both stay on the row; the rest of the
/// snapshot is unaffected.
#[derive(Debug)]
pub struct DashboardRow {
    pub asset_id: AssetId,
    /// `"Name (SYM)"`, kept so a row that failed to format can still be shown.
    pub name: String,
    pub cells: Result<Row, FormatError>,
    /// Present only for snapshots fetched with history.
    pub history: Option<Result<HistorySeries, SdkError>>,
}

impl DashboardRow {
    fn from_asset(asset: &Asset) -> Self {
        let cells = asset_row(asset);
        if let Err(err) = &cells {
            tracing::warn!(asset = %asset.id, error = %err, "row not formatted");
        }
        Self {
            asset_id: asset.id.clone(),
            name: asset.display_name(),
            cells,
            history: None,
        }
    }

    /// The four cells, with [`UNFORMATTED`] in place of values that failed.
    pub fn display_cells(&self) -> Row {
        match &self.cells {
            Ok(row) => row.clone(),
            Err(_) => [
                self.name.clone(),
                UNFORMATTED.to_string(),
                UNFORMATTED.to_string(),
                UNFORMATTED.to_string(),
            ],
        }
    }

    /// Sparkline plus min/max for the row's history, or the fetch error.
    pub fn trend(&self, width: usize) -> String {
        match &self.history {
            None => String::new(),
            Some(Err(err)) => format!("unavailable: {}", err),
            Some(Ok(series)) => {
                let prices = series.prices();
                let low = series.min_price().unwrap_or_default();
                let high = series.max_price().unwrap_or_default();
                format!(
                    "{} {} .. {}",
                    sparkline(&prices, width),
                    num::display(low),
                    num::display(high)
                )
            }
        }
    }
}

/// One dashboard refresh, rows in rank order.
#[derive(Debug)]
pub struct Snapshot {
    /// Server time of the asset page (Unix ms).
    pub timestamp: i64,
    pub rows: Vec<DashboardRow>,
}

impl Snapshot {
    /// The rows as plain cells, for a widget sink.
    pub fn cells(&self) -> Vec<Row> {
        self.rows.iter().map(DashboardRow::display_cells).collect()
    }

    pub fn has_history(&self) -> bool {
        self.rows.iter().any(|r| r.history.is_some())
    }

    /// Render as a text table; adds a trend column when history was fetched.
    pub fn render(&self) -> String {
        let with_trend = self.has_history();
        let mut headers: Vec<&str> = HEADERS.to_vec();
        if with_trend {
            headers.push("Trend");
        }

        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = row.display_cells().to_vec();
                if with_trend {
                    cells.push(row.trend(24));
                }
                cells
            })
            .collect();

        render_table(&headers, &rows)
    }
}

/// Left-aligned fixed-width table with a header rule.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(pad_line(headers.iter().copied(), &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        out.push(pad_line(row.iter().map(String::as_str), &widths));
    }
    out.join("\n")
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Unicode block sparkline, downsampled to at most `width` points.
pub fn sparkline(prices: &[f64], width: usize) -> String {
    if prices.is_empty() || width == 0 {
        return String::new();
    }

    let step = prices.len().div_ceil(width);
    let points: Vec<f64> = prices.chunks(step).filter_map(|c| c.last().copied()).collect();

    let low = points.iter().copied().fold(f64::INFINITY, f64::min);
    let high = points.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = high - low;
    let top = (SPARK_LEVELS.len() - 1) as f64;

    points
        .iter()
        .map(|p| {
            let level = if span > 0.0 {
                ((p - low) / span * top).round() as usize
            } else {
                SPARK_LEVELS.len() / 2
            };
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════════
// Driver
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
pub use driver::Dashboard;

#[cfg(feature = "http")]
mod driver {
    use super::{DashboardRow, Snapshot};
    use crate::client::CoinCapClient;
    use crate::error::SdkError;
    use crate::shared::Interval;
    use futures_util::future::join_all;
    use std::time::Duration;

    /// Fetches asset pages (and optionally per-asset history) into snapshots.
    #[derive(Clone)]
    pub struct Dashboard {
        client: CoinCapClient,
    }

    impl Dashboard {
        pub fn new(client: CoinCapClient) -> Self {
            Self { client }
        }

        /// Top `limit` assets, formatted. Fails only when the page itself
        /// cannot be fetched or decoded.
        pub async fn snapshot(&self, limit: u32) -> Result<Snapshot, SdkError> {
            let page = self.client.assets().list(limit).await?;
            let rows = page.iter().map(DashboardRow::from_asset).collect();

            Ok(Snapshot {
                timestamp: page.timestamp,
                rows,
            })
        }

        /// Like [`Dashboard::snapshot`], plus one history request per asset.
        ///
        /// History requests run concurrently; each row keeps its own result,
        /// so one failed series does not drop the row.
        pub async fn snapshot_with_history(
            &self,
            limit: u32,
            interval: Interval,
            window: Duration,
        ) -> Result<Snapshot, SdkError> {
            let mut snapshot = self.snapshot(limit).await?;

            let history = self.client.history();
            let series = join_all(
                snapshot
                    .rows
                    .iter()
                    .map(|row| history.lookback(row.asset_id.as_str(), interval, window)),
            )
            .await;

            for (row, result) in snapshot.rows.iter_mut().zip(series) {
                if let Err(err) = &result {
                    tracing::warn!(asset = %row.asset_id, error = %err, "history unavailable");
                }
                row.history = Some(result);
            }

            Ok(snapshot)
        }
    }
}
