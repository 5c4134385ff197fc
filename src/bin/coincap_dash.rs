//! `coincap-dash`: print the top assets as a table, once or on an interval.
//!
//! ```bash
//! coincap-dash --limit 20
//! coincap-dash --symbol eth
//! coincap-dash --history --interval m5 --window-mins 120 --watch 30
//! ```

use std::future::Future;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use coincap_sdk::prelude::*;
use coincap_sdk::shared::fmt::num;

#[derive(Parser, Debug)]
#[command(name = "coincap-dash", version, about = "CoinCap market dashboard")]
struct Cli {
    /// Assets endpoint base URL.
    #[arg(long, default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Number of ranked assets to show.
    #[arg(short, long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    limit: u32,

    /// Show a single asset by ticker symbol (case-insensitive) with its last-hour history.
    #[arg(short, long)]
    symbol: Option<String>,

    /// Fetch price history for every row.
    #[arg(long)]
    history: bool,

    /// History sampling interval (m1, m5, m15, m30, h1, h2, h6, h12, d1).
    #[arg(long, default_value = "m1")]
    interval: Interval,

    /// History lookback window in minutes.
    #[arg(long, default_value_t = 60)]
    window_mins: u64,

    /// Refresh every N seconds instead of exiting after one snapshot.
    #[arg(short, long)]
    watch: Option<u64>,

    /// Give up on a refresh after N seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn render_symbol(client: &CoinCapClient, symbol: &str) -> Result<String, SdkError> {
    let asset = match client.assets().find_by_symbol(symbol).await? {
        Some(asset) => asset,
        None => return Ok(format!("No asset matches symbol {}", symbol)),
    };

    let row = asset_row(&asset)?;
    let mut out = coincap_sdk::dashboard::render_table(&HEADERS, &[row.to_vec()]);

    match client.history().last_hour(asset.id.as_str()).await {
        Ok(series) => {
            out.push_str(&format!(
                "\n\nLast hour ({} samples @ {}): {}\nlow {}  high {}  change {}",
                series.len(),
                series.interval,
                coincap_sdk::dashboard::sparkline(&series.prices(), 60),
                num::display(series.min_price().unwrap_or_default()),
                num::display(series.max_price().unwrap_or_default()),
                series
                    .change_percent()
                    .map(|c| format!("{:+.2}%", c))
                    .unwrap_or_else(|| "-".to_string()),
            ));
        }
        Err(err) => {
            tracing::warn!(error = %err, "history unavailable");
            out.push_str(&format!("\n\nLast hour: unavailable ({})", err));
        }
    }

    Ok(out)
}

async fn refresh(cli: &Cli, client: &CoinCapClient, dashboard: &Dashboard) -> Result<String, SdkError> {
    if let Some(symbol) = &cli.symbol {
        return render_symbol(client, symbol).await;
    }

    let snapshot = if cli.history {
        dashboard
            .snapshot_with_history(
                cli.limit,
                cli.interval,
                Duration::from_secs(cli.window_mins.saturating_mul(60)),
            )
            .await?
    } else {
        dashboard.snapshot(cli.limit).await?
    };

    let stamp = coincap_sdk::shared::time::datetime_from_ms(snapshot.timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| snapshot.timestamp.to_string());

    Ok(format!("{}\n\nas of {}", snapshot.render(), stamp))
}

async fn refresh_with_timeout(
    cli: &Cli,
    client: &CoinCapClient,
    dashboard: &Dashboard,
) -> Result<String, String> {
    match tokio::time::timeout(Duration::from_secs(cli.timeout), refresh(cli, client, dashboard)).await {
        Ok(Ok(out)) => Ok(out),
        Ok(Err(err)) => Err(err.to_string()),
        Err(_) => Err(format!("refresh timed out after {}s", cli.timeout)),
    }
}

/// `Some(output)` when `work` finishes first, `None` when `interrupt` does.
async fn unless_interrupted<T>(work: impl Future<Output = T>, interrupt: impl Future) -> Option<T> {
    tokio::select! {
        out = work => Some(out),
        _ = interrupt => None,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let client = match CoinCapClient::builder()
        .base_url(&cli.base_url)
        .user_agent(concat!("coincap-dash/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "failed to build client");
            return ExitCode::FAILURE;
        }
    };
    let dashboard = Dashboard::new(client.clone());

    let Some(every) = cli.watch else {
        return match refresh_with_timeout(&cli, &client, &dashboard).await {
            Ok(out) => {
                println!("{}", out);
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(error = %err, "refresh failed");
                ExitCode::FAILURE
            }
        };
    };

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut ticker = tokio::time::interval(Duration::from_secs(every.max(1)));
    loop {
        if unless_interrupted(ticker.tick(), &mut ctrl_c).await.is_none() {
            break;
        }
        match unless_interrupted(refresh_with_timeout(&cli, &client, &dashboard), &mut ctrl_c).await {
            None => break,
            // Clear screen, cursor home.
            Some(Ok(out)) => println!("\x1B[2J\x1B[H{}", out),
            Some(Err(err)) => tracing::warn!(error = %err, "refresh failed; keeping last view"),
        }
    }

    tracing::info!("interrupted");
    ExitCode::SUCCESS
}
