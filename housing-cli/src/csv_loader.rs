//! CSV loader for buy-versus-rent scenarios.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so order does **not** matter. Header
//! names are case-sensitive. Amount cells accept the same text as the
//! command-line flags (`500,000`, `$500,000`, `6.5%`).
//!
//! | Column                  | Required | Notes                                  |
//! |-------------------------|----------|----------------------------------------|
//! | `house_price`           | yes      | currency                               |
//! | `user_income`           | yes      | currency, annual                       |
//! | `mortgage_rate`         | yes      | percent                                |
//! | `home_appreciation`     | yes      | percent                                |
//! | `filing_status`         | yes      | `S` or `MFJ`                           |
//! | `insurance_percent`     | no       | empty cell → 0.5                       |
//! | `down_payment_percent`  | no       | empty cell → 20                        |
//! | `closing_costs_percent` | no       | empty cell → 3                         |
//! | `opportunity_cost_rate` | no       | empty cell → 8                         |
//! | `mortgage_years`        | no       | integer, empty cell → 30               |
//! | `maintenance_cost_rate` | no       | empty cell → 1                         |
//! | `property_tax_rate`     | no       | empty cell → 1                         |
//!
//! ### Minimal example
//!
//! ```csv
//! house_price,user_income,mortgage_rate,home_appreciation,filing_status
//! 500000,120000,6.5,3,S
//! ```
use std::path::Path;

use housing_core::{
    AffordabilityInput, DEFAULT_CLOSING_COSTS_PERCENT, DEFAULT_DOWN_PAYMENT_PERCENT,
    DEFAULT_INSURANCE_PERCENT, DEFAULT_MAINTENANCE_COST_RATE, DEFAULT_MORTGAGE_YEARS,
    DEFAULT_OPPORTUNITY_COST_RATE, DEFAULT_PROPERTY_TAX_RATE, FilingStatus,
};
use serde::Deserialize;

use crate::utils::{ParseAmountError, parse_amount, parse_optional_amount};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    house_price: String,
    user_income: String,
    mortgage_rate: String,
    home_appreciation: String,
    filing_status: String,
    #[serde(default)]
    insurance_percent: String,
    #[serde(default)]
    down_payment_percent: String,
    #[serde(default)]
    closing_costs_percent: String,
    #[serde(default)]
    opportunity_cost_rate: String,
    #[serde(default)]
    mortgage_years: Option<u32>,
    #[serde(default)]
    maintenance_cost_rate: String,
    #[serde(default)]
    property_tax_rate: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting scenario CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, non-integer term, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `filing_status` cell held an unrecognised code. `row` is 1-based
    /// over data rows.
    #[error("unrecognised filing status '{status}' on row {row}")]
    InvalidFilingStatus { status: String, row: usize },

    /// An amount cell could not be parsed.
    #[error("invalid {column} on row {row}: {source}")]
    InvalidAmount {
        column: &'static str,
        row: usize,
        #[source]
        source: ParseAmountError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn required(
    value: &str,
    column: &'static str,
    row: usize,
) -> Result<f64, CsvLoadError> {
    parse_amount(value).map_err(|source| CsvLoadError::InvalidAmount {
        column,
        row,
        source,
    })
}

fn optional(
    value: &str,
    column: &'static str,
    row: usize,
    default: f64,
) -> Result<f64, CsvLoadError> {
    parse_optional_amount(value)
        .map(|v| v.unwrap_or(default))
        .map_err(|source| CsvLoadError::InvalidAmount {
            column,
            row,
            source,
        })
}

/// Convert a single CSV row into an [`AffordabilityInput`].
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<AffordabilityInput, CsvLoadError> {
    let filing_status = FilingStatus::parse(&row.filing_status).ok_or_else(|| {
        CsvLoadError::InvalidFilingStatus {
            status: row.filing_status.clone(),
            row: row_number,
        }
    })?;

    Ok(AffordabilityInput {
        house_price: required(&row.house_price, "house_price", row_number)?,
        user_income: required(&row.user_income, "user_income", row_number)?,
        mortgage_rate: required(&row.mortgage_rate, "mortgage_rate", row_number)?,
        home_appreciation: required(&row.home_appreciation, "home_appreciation", row_number)?,
        filing_status,
        insurance_percent: optional(
            &row.insurance_percent,
            "insurance_percent",
            row_number,
            DEFAULT_INSURANCE_PERCENT,
        )?,
        down_payment_percent: optional(
            &row.down_payment_percent,
            "down_payment_percent",
            row_number,
            DEFAULT_DOWN_PAYMENT_PERCENT,
        )?,
        closing_costs_percent: optional(
            &row.closing_costs_percent,
            "closing_costs_percent",
            row_number,
            DEFAULT_CLOSING_COSTS_PERCENT,
        )?,
        opportunity_cost_rate: optional(
            &row.opportunity_cost_rate,
            "opportunity_cost_rate",
            row_number,
            DEFAULT_OPPORTUNITY_COST_RATE,
        )?,
        mortgage_years: row.mortgage_years.unwrap_or(DEFAULT_MORTGAGE_YEARS),
        maintenance_cost_rate: optional(
            &row.maintenance_cost_rate,
            "maintenance_cost_rate",
            row_number,
            DEFAULT_MAINTENANCE_COST_RATE,
        )?,
        property_tax_rate: optional(
            &row.property_tax_rate,
            "property_tax_rate",
            row_number,
            DEFAULT_PROPERTY_TAX_RATE,
        )?,
    })
}

/// Parse CSV text and return one [`AffordabilityInput`] per data row, in
/// file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   required column is missing.
/// * [CsvLoadError::InvalidFilingStatus] – if a row has an unknown
///   filing-status code.
/// * [CsvLoadError::InvalidAmount] – if an amount cell cannot be parsed.
pub fn load_from_str(input: &str) -> Result<Vec<AffordabilityInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<AffordabilityInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
