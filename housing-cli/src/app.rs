//! Glue between the command line and the calculator.

use std::path::Path;

use anyhow::{Context, Result};
use housing_core::{AffordabilityCalculator, AffordabilityInput};
use tracing::info;

use crate::csv_loader;
use crate::report::{OutputFormat, ScenarioReport, format_currency, render_json, render_text};

/// Runs the calculator over `inputs`, numbering scenarios from 1.
pub fn run_scenarios(
    calculator: &AffordabilityCalculator,
    inputs: Vec<AffordabilityInput>,
) -> Vec<ScenarioReport> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(idx, input)| ScenarioReport {
            scenario: idx + 1,
            result: calculator.calculate(&input),
            input,
        })
        .collect()
}

/// Loads every scenario in a CSV file and computes it.
pub fn run_batch(
    calculator: &AffordabilityCalculator,
    path: &Path,
) -> Result<Vec<ScenarioReport>> {
    let inputs = csv_loader::load_from_file(path)
        .with_context(|| format!("Failed to load scenarios: {}", path.display()))?;
    info!(count = inputs.len(), path = %path.display(), "loaded scenarios");

    Ok(run_scenarios(calculator, inputs))
}

/// Renders computed scenarios in the requested format.
pub fn render(
    reports: &[ScenarioReport],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(reports).context("Failed to serialize results"),
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| {
                let title = format!(
                    "Scenario {}: {} house, {} income",
                    r.scenario,
                    format_currency(r.input.house_price),
                    format_currency(r.input.user_income),
                );
                render_text(&title, &r.result)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
