//! Low-level HTTP client: `CoinCapHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients).

use crate::domain::asset::wire::{AssetsResponse, SingleAssetResponse};
use crate::domain::history::wire::HistoryResponse;
use crate::error::{DecodeError, HttpError, SdkError};
use crate::shared::Interval;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Low-level HTTP client for the CoinCap REST API.
#[derive(Clone)]
pub struct CoinCapHttp {
    base_url: String,
    client: Client,
}

impl CoinCapHttp {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS, timeouts).
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Assets ───────────────────────────────────────────────────────────

    pub fn asset_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id))
    }

    pub fn assets_url(&self, limit: u32) -> String {
        format!("{}?limit={}", self.base_url, limit)
    }

    pub fn search_url(&self, query: &str, limit: u32) -> String {
        format!(
            "{}?search={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        )
    }

    pub async fn get_asset(&self, id: &str) -> Result<SingleAssetResponse, SdkError> {
        self.get(&self.asset_url(id)).await
    }

    pub async fn get_assets(&self, limit: u32) -> Result<AssetsResponse, SdkError> {
        self.get(&self.assets_url(limit)).await
    }

    pub async fn search_assets(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<AssetsResponse, SdkError> {
        self.get(&self.search_url(query, limit)).await
    }

    // ── History ──────────────────────────────────────────────────────────

    pub fn history_url(&self, id: &str, interval: Interval, start: i64, end: i64) -> String {
        format!(
            "{}/history?interval={}&start={}&end={}",
            self.asset_url(id),
            interval.as_str(),
            start,
            end
        )
    }

    pub async fn get_asset_history(
        &self,
        id: &str,
        interval: Interval,
        start: i64,
        end: i64,
    ) -> Result<HistoryResponse, SdkError> {
        self.get(&self.history_url(id, interval, start, end)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// GET `url`, read the whole body, decode it as `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, SdkError> {
        let body = self.do_request(url).await?;
        let parsed = serde_json::from_slice::<T>(&body).map_err(DecodeError::from)?;
        Ok(parsed)
    }

    async fn do_request(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.bytes().await?;
            tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "response");
            return Ok(body.to_vec());
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(url, status = status_code, "request failed");

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
