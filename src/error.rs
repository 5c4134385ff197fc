//! Unified SDK error types.

use crate::shared::fmt::FormatError;
use crate::shared::Interval;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Transport-level failure (connection, DNS, non-success status).
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Malformed JSON, a shape mismatch, or a numeric field that fails to parse.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The history endpoint returned zero samples for the requested window.
    #[error("Empty price history for {asset_id} at interval {interval}")]
    EmptySeries { asset_id: String, interval: Interval },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

impl SdkError {
    /// True for failures that happened before a response body could be decoded.
    pub fn is_network(&self) -> bool {
        matches!(self, SdkError::Http(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, SdkError::Decode(_))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Payload decoding errors.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Asset {asset_id}: {source}")]
    Asset {
        asset_id: String,
        #[source]
        source: Box<DecodeError>,
    },

    #[error("Price samples are not in ascending time order (at index {index})")]
    UnorderedSamples { index: usize },
}

impl DecodeError {
    /// Attach the asset id of the record that failed to decode.
    pub fn for_asset(self, asset_id: impl Into<String>) -> Self {
        DecodeError::Asset {
            asset_id: asset_id.into(),
            source: Box::new(self),
        }
    }
}
