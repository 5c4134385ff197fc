//! # CoinCap SDK
//!
//! A Rust client for the public CoinCap market-data API, plus the row
//! formatting behind the `coincap-dash` terminal dashboard.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, interval catalog, domain models, formatters
//! 2. **HTTP API**: `CoinCapHttp`, one GET per call, no retries
//! 3. **High-Level Client**: `CoinCapClient` with nested sub-clients
//! 4. **Dashboard**: formatted rows and snapshots for the terminal
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coincap_sdk::prelude::*;
//!
//! let client = CoinCapClient::builder().build()?;
//!
//! let page = client.assets().list(10).await?;
//! let btc = client.assets().find_by_symbol("btc").await?;
//! let series = client.history().last_hour("bitcoin").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, interval catalog, formatters.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinCapClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Dashboard ───────────────────────────────────────────────────────

/// Dashboard rows, snapshots and text rendering.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AssetId, DecimalStr, Interval};

    // Domain types
    pub use crate::domain::asset::{Asset, AssetPage};
    pub use crate::domain::history::{HistorySeries, PriceSample};

    // Formatting
    pub use crate::shared::fmt::{format_magnitude, format_percent, truncate_price, FormatError};

    // Errors
    pub use crate::error::{DecodeError, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_LIMIT, SEARCH_PAGE_SIZE};

    // Dashboard
    pub use crate::dashboard::{asset_row, Row, Snapshot, HEADERS};
    #[cfg(feature = "http")]
    pub use crate::dashboard::Dashboard;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AssetsClient, CoinCapClient, CoinCapClientBuilder, HistoryClient};
}
