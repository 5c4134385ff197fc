//! Human-readable formatting for dashboard cells.

pub mod num;

pub use num::{format_magnitude, format_percent, truncate_price};

use thiserror::Error;

/// Formatting failures. Returned instead of aborting so callers decide.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("value out of range for magnitude formatting: {0:?}")]
    OutOfRange(String),

    #[error("no decimal point in {0:?}")]
    MissingDecimalPoint(String),

    #[error("empty value")]
    Empty,
}
