//! Calculator configuration file.
//!
//! A TOML file holding any subset of the [`CalculatorConfig`] keys:
//!
//! ```toml
//! front_end_ratio_limit = 0.28
//! mortgage_principal_deduction_cap = 750000
//! property_tax_deduction_cap = 10000
//! state_tax_rate = 0.05
//! ```
//!
//! Missing keys keep their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use housing_core::{CalculatorConfig, CalculatorConfigError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] CalculatorConfigError),
}

/// Parses and validates configuration text.
pub fn parse_config(text: &str) -> Result<CalculatorConfig, ConfigError> {
    let config: CalculatorConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads the configuration at `path`, or returns the defaults when no path
/// is given.
pub fn load_config(path: Option<&Path>) -> Result<CalculatorConfig> {
    let Some(path) = path else {
        return Ok(CalculatorConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = parse_config(&text)
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    debug!(path = %path.display(), ?config, "loaded calculator config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), CalculatorConfig::default());
    }

    #[test]
    fn partial_file_overrides_named_keys() {
        let config = parse_config("state_tax_rate = 0.05\nproperty_tax_deduction_cap = 20000\n")
            .unwrap();

        assert_eq!(
            config,
            CalculatorConfig {
                state_tax_rate: 0.05,
                property_tax_deduction_cap: 20_000.0,
                ..Default::default()
            }
        );
    }

    #[test]
    fn integer_values_are_accepted_for_caps() {
        let config = parse_config("mortgage_principal_deduction_cap = 1000000").unwrap();

        assert_eq!(config.mortgage_principal_deduction_cap, 1_000_000.0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = parse_config("front_end_ratio_limit = 1.5").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid(CalculatorConfigError::InvalidFrontEndRatioLimit(_))
        ));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            parse_config("state_tax_rate = "),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), CalculatorConfig::default());
    }

    #[test]
    fn unreadable_path_reports_file_name() {
        let err = load_config(Some(Path::new("/nonexistent/homecost.toml"))).unwrap_err();

        assert!(err.to_string().contains("homecost.toml"));
    }
}
