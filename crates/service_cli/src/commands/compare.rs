//! Compare command implementation
//!
//! Simulates every active scenario of the catalog and compares them.

use std::path::Path;

use clap::ValueEnum;
use econ_core::types::BaseSimulationInput;
use econ_risk::catalog::RiskAlert;
use econ_risk::comparison::{ComparisonEngine, ComparisonResult, CorrelationMethod};
use serde::Serialize;
use tracing::info;

use super::load_catalog;
use crate::config::{CliConfig, OutputFormat};
use crate::output::{money, pct, print_csv, print_json, render_table, ResultSummary};
use crate::Result;

/// Correlation matrix method selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CorrelationArg {
    /// Fixed 0.7 between distinct scenarios
    #[default]
    Placeholder,
    /// Pearson correlation of monthly returns
    Pearson,
}

impl From<CorrelationArg> for CorrelationMethod {
    fn from(arg: CorrelationArg) -> Self {
        match arg {
            CorrelationArg::Placeholder => CorrelationMethod::default(),
            CorrelationArg::Pearson => CorrelationMethod::Pearson,
        }
    }
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    seed: u64,
    scenarios: &'a [ResultSummary],
    comparison: &'a ComparisonResult,
    alerts: &'a [RiskAlert],
}

/// Run the compare command
pub fn run(
    config: &CliConfig,
    base: &BaseSimulationInput,
    seed: u64,
    catalog: Option<&Path>,
    correlation: CorrelationArg,
    format: OutputFormat,
) -> Result<()> {
    info!(seed, months = base.horizon_months, ?correlation, "starting comparison");

    let engine = ComparisonEngine::new().with_method(correlation.into());
    let catalog = load_catalog(catalog, config)?.with_comparison(engine);
    let (results, comparison) = catalog.compare_active(base, seed)?;
    let summaries: Vec<ResultSummary> = results.iter().map(ResultSummary::from).collect();
    let alerts: Vec<RiskAlert> = results
        .iter()
        .flat_map(|r| catalog.evaluate_alerts(r))
        .collect();

    match format {
        OutputFormat::Json => print_json(&ComparisonReport {
            seed,
            scenarios: &summaries,
            comparison: &comparison,
            alerts: &alerts,
        })?,
        OutputFormat::Csv => print_csv(&summaries)?,
        OutputFormat::Table => print!("{}", render_comparison(&summaries, &comparison, &alerts)),
    }

    info!(
        best = %comparison.best_scenario_id,
        worst = %comparison.worst_scenario_id,
        "comparison complete"
    );
    Ok(())
}

fn render_comparison(
    summaries: &[ResultSummary],
    comparison: &ComparisonResult,
    alerts: &[RiskAlert],
) -> String {
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.scenario_id.clone(),
                money(s.final_balance),
                pct(s.total_return_pct),
                pct(s.real_return_pct),
                pct(s.volatility_pct),
                format!("{} ({:.0})", s.risk_level, s.risk_score),
            ]
        })
        .collect();
    let mut out = render_table(
        &["Scenario", "Final", "Return", "Real", "Volatility", "Risk"],
        &rows,
    );

    let ids = &comparison.scenario_ids;
    let mut headers: Vec<&str> = vec![""];
    headers.extend(ids.iter().map(String::as_str));
    let matrix: Vec<Vec<String>> = ids
        .iter()
        .zip(&comparison.correlation_matrix)
        .map(|(id, row)| {
            std::iter::once(id.clone())
                .chain(row.iter().map(|rho| format!("{:.3}", rho)))
                .collect()
        })
        .collect();
    out.push_str(&render_table(&headers, &matrix));

    out.push_str(&format!(
        "best: {}  worst: {}  most likely: {}\n",
        comparison.best_scenario_id,
        comparison.worst_scenario_id,
        comparison.most_likely_scenario_id
    ));
    out.push_str(&format!(
        "spread: {}  average: {}\n",
        money(comparison.differences.max),
        money(comparison.differences.avg)
    ));
    out.push_str(&format!(
        "{} variability (confidence {:.0}%): {}\n",
        comparison.recommendation.variability,
        comparison.recommendation.confidence * 100.0,
        comparison.recommendation.text
    ));
    for alert in alerts {
        out.push_str(&format!("[{:?}] {}\n", alert.severity, alert.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_arg_mapping() {
        assert_eq!(
            CorrelationMethod::from(CorrelationArg::Placeholder),
            CorrelationMethod::Placeholder(0.7)
        );
        assert_eq!(
            CorrelationMethod::from(CorrelationArg::Pearson),
            CorrelationMethod::Pearson
        );
    }

    #[test]
    fn test_render_comparison_presets() {
        let catalog = load_catalog(None, &CliConfig::default()).unwrap();
        let base = BaseSimulationInput::new(10_000.0, 500.0, 12);
        let (results, comparison) = catalog.compare_active(&base, 42).unwrap();
        let summaries: Vec<ResultSummary> = results.iter().map(ResultSummary::from).collect();

        let text = render_comparison(&summaries, &comparison, &[]);
        assert!(text.contains("most likely: realistic"));
        assert!(text.contains("0.700"));
        assert!(text.contains("confidence 85%"));
    }
}
