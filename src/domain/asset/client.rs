//! Assets sub-client: lookup by id, ranked page, symbol search.

use crate::client::CoinCapClient;
use crate::domain::asset::{symbol_matches, Asset, AssetPage};
use crate::error::{HttpError, SdkError};
use crate::network::SEARCH_PAGE_SIZE;

/// Sub-client for asset operations.
pub struct Assets<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> Assets<'a> {
    /// Get a single asset by id (e.g. `"bitcoin"`).
    pub async fn get(&self, id: &str) -> Result<Asset, SdkError> {
        let resp = match self.client.http.get_asset(id).await {
            Err(SdkError::Http(HttpError::NotFound(_))) => {
                return Err(SdkError::NotFound(format!("Asset not found: {}", id)))
            }
            other => other?,
        };

        let data = resp
            .data
            .ok_or_else(|| SdkError::NotFound(format!("Asset not found: {}", id)))?;
        Ok(Asset::try_from(data)?)
    }

    /// Get the top `limit` assets by rank.
    ///
    /// The page never holds more than `limit` assets and keeps server order.
    pub async fn list(&self, limit: u32) -> Result<AssetPage, SdkError> {
        if limit == 0 {
            return Err(SdkError::Validation(
                "limit must be a positive integer".to_string(),
            ));
        }

        let mut resp = self.client.http.get_assets(limit).await?;
        if resp.data.len() > limit as usize {
            tracing::warn!(
                limit,
                received = resp.data.len(),
                "server returned more assets than requested; dropping the excess"
            );
            resp.data.truncate(limit as usize);
        }

        Ok(AssetPage::try_from(resp)?)
    }

    /// Find an asset by ticker symbol, ignoring case.
    ///
    /// Only the first `SEARCH_PAGE_SIZE` search results are considered; the
    /// first exact match in server order wins. `Ok(None)` when none match.
    pub async fn find_by_symbol(&self, symbol: &str) -> Result<Option<Asset>, SdkError> {
        let query = symbol.to_uppercase();
        let resp = self
            .client
            .http
            .search_assets(&query, SEARCH_PAGE_SIZE)
            .await?;

        let found = resp
            .data
            .into_iter()
            .find(|candidate| symbol_matches(&candidate.symbol, &query));

        match found {
            Some(candidate) => Ok(Some(Asset::try_from(candidate)?)),
            None => {
                tracing::debug!(symbol = %query, "no asset matches symbol");
                Ok(None)
            }
        }
    }
}
