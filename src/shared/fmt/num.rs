//! Number formatting utilities for human-readable display.
//!
//! The cell formatters take the raw decimal strings the API sends and never
//! index past the end of their input.

use super::FormatError;

/// Characters kept by [`truncate_price`].
pub const PRICE_WIDTH: usize = 7;

/// Digits kept after the decimal point by [`format_percent`].
pub const PERCENT_DECIMALS: usize = 2;

fn magnitude_suffix(exponent: i32) -> Option<&'static str> {
    match exponent {
        2 => Some("M"),
        3 => Some("B"),
        4 => Some("T"),
        _ => None,
    }
}

/// Compress a large number into `"1.23M"` / `"4.56B"` / `"7.89T"`.
///
/// `exponent = floor(log10(v) / 3)` picks the suffix. Exponents without a
/// suffix (below a million, or a quadrillion and above) print the plain
/// scientific mantissa with no suffix, so `"999"` becomes `"9.99"`.
pub fn format_magnitude(value: &str) -> Result<String, FormatError> {
    let num: f64 = value
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidNumber(value.to_string()))?;

    if !num.is_finite() || num < 0.0 {
        return Err(FormatError::OutOfRange(value.to_string()));
    }
    if num == 0.0 {
        return Ok("0.00".to_string());
    }

    let magnitude = num.log10().floor() as i32;
    let exponent = magnitude.div_euclid(3);

    let (scale, suffix) = match magnitude_suffix(exponent) {
        Some(suffix) => (exponent * 3, suffix),
        None => (magnitude, ""),
    };

    Ok(format!("{:.2}{}", num / 10f64.powi(scale), suffix))
}

/// Cut a percentage string to two decimals and append `%`.
///
/// `"3.14159"` becomes `"3.14%"`, `"-0.5"` becomes `"-0.5%"`.
pub fn format_percent(value: &str) -> Result<String, FormatError> {
    let dot = value
        .find('.')
        .ok_or_else(|| FormatError::MissingDecimalPoint(value.to_string()))?;

    let fraction: String = value[dot + 1..].chars().take(PERCENT_DECIMALS).collect();
    Ok(format!("{}.{}%", &value[..dot], fraction))
}

/// First [`PRICE_WIDTH`] characters of a price string, or all of it when shorter.
pub fn truncate_price(value: &str) -> Result<String, FormatError> {
    if value.is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(value.chars().take(PRICE_WIDTH).collect())
}

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (integer, fraction) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed.as_str(), None),
    };

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn get_decimal_places(value: f64) -> usize {
    let abs_value = value.abs();

    if abs_value >= 100.0 {
        return 2;
    }

    if abs_value >= 1.0 {
        return 4;
    }

    if abs_value == 0.0 {
        return 2;
    }

    let exponent = abs_value.log10().floor().abs() as usize;
    (exponent + 3).min(10)
}

/// Format an f64 price for display with auto-detected decimal places.
pub fn display(amount: f64) -> String {
    display_with_decimals(amount, get_decimal_places(amount))
}

/// Format an f64 for display with explicit decimal places.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    display_formatted_string(formatted)
}
