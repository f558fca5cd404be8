use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use housing_core::FilingStatus;

/// Error returned when form-style text cannot be read as an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("a value is required")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{0}' is out of range")]
    OutOfRange(String),
}

/// Normalizes form input: trims whitespace, drops thousands separators, a
/// leading `$` and a trailing `%`.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest.trim_start()),
        None => ("", trimmed),
    };
    let digits = digits.strip_prefix('$').unwrap_or(digits);

    format!("{sign}{}", digits.replace(',', ""))
}

/// Parses the text of a numeric form field.
///
/// Accepts `"500000"`, `"500,000"`, `"$500,000"`, `"6.5%"` and `"-$1,200"`.
/// Empty or whitespace-only input is an error; the value is required.
pub fn parse_amount(s: &str) -> Result<f64, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() || normalized == "-" {
        return Err(ParseAmountError::Empty);
    }

    let decimal: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    decimal
        .to_f64()
        .ok_or_else(|| ParseAmountError::OutOfRange(s.to_string()))
}

/// Parses an optional numeric field. Empty input yields `None`; anything
/// else must parse.
pub fn parse_optional_amount(s: &str) -> Result<Option<f64>, ParseAmountError> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_amount(s).map(Some)
    }
}

/// `clap` value parser for filing status codes.
pub fn parse_filing_status(s: &str) -> Result<FilingStatus, String> {
    FilingStatus::parse(s).ok_or_else(|| {
        format!("unknown filing status '{s}' (expected S or MFJ)")
    })
}
