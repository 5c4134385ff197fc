//! Network constants for the CoinCap SDK.

/// Default REST base URL (the assets collection endpoint).
pub const DEFAULT_API_URL: &str = "https://api.coincap.io/v2/assets";

/// Default number of assets fetched for a ranked page.
pub const DEFAULT_LIMIT: u32 = 10;

/// Page size used when searching assets by symbol.
pub const SEARCH_PAGE_SIZE: u32 = 10;
