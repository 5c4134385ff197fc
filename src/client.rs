//! High-level client: `CoinCapClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::asset::client::Assets;
use crate::domain::history::client::History;
use crate::error::SdkError;
use crate::http::CoinCapHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::history::client::History as HistoryClient;

/// The primary entry point for the CoinCap SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.assets()`, `client.history()`.
#[derive(Clone)]
pub struct CoinCapClient {
    pub(crate) http: CoinCapHttp,
}

impl CoinCapClient {
    pub fn builder() -> CoinCapClientBuilder {
        CoinCapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    /// The low-level transport, for endpoints without a sub-client method.
    pub fn http(&self) -> &CoinCapHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinCapClientBuilder {
    base_url: String,
    user_agent: Option<String>,
}

impl Default for CoinCapClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            user_agent: None,
        }
    }
}

impl CoinCapClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.user_agent = Some(agent.to_string());
        self
    }

    pub fn build(self) -> Result<CoinCapClient, SdkError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(SdkError::Validation(format!(
                "base URL must start with http:// or https://: {}",
                self.base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        let client = builder
            .build()
            .map_err(|e| SdkError::Http(e.into()))?;

        Ok(CoinCapClient {
            http: CoinCapHttp::with_client(&self.base_url, client),
        })
    }
}
