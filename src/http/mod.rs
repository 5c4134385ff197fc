//! HTTP client layer: `CoinCapHttp`, one GET per call, no retries.

pub mod client;

pub use client::CoinCapHttp;
