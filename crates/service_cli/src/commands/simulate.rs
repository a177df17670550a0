//! Simulate command implementation
//!
//! Runs one scenario for a contribution plan and reports the evolution,
//! risk analytics and triggered alerts.

use std::path::Path;

use econ_core::types::{BaseSimulationInput, ScenarioResult};
use econ_risk::catalog::RiskAlert;
use serde::Serialize;
use tracing::info;

use super::{load_catalog, resolve_scenario};
use crate::config::{CliConfig, OutputFormat};
use crate::output::{money, pct, print_csv, print_json, render_table};
use crate::Result;

#[derive(Serialize)]
struct SimulationReport<'a> {
    seed: u64,
    result: &'a ScenarioResult,
    alerts: &'a [RiskAlert],
}

/// Run the simulate command
pub fn run(
    config: &CliConfig,
    base: &BaseSimulationInput,
    seed: u64,
    scenario: &str,
    catalog: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    info!(scenario, seed, months = base.horizon_months, "starting simulation");

    let catalog = load_catalog(catalog, config)?;
    let id = resolve_scenario(&catalog, scenario)?.id.clone();
    let result = catalog.simulate(&id, base, seed)?;
    let alerts = catalog.evaluate_alerts(&result);

    match format {
        OutputFormat::Json => print_json(&SimulationReport {
            seed,
            result: &result,
            alerts: &alerts,
        })?,
        OutputFormat::Csv => print_csv(&result.evolution)?,
        OutputFormat::Table => print!("{}", render_report(&result, &alerts)),
    }

    info!(scenario = %id, final_balance = result.final_balance, "simulation complete");
    Ok(())
}

fn render_report(result: &ScenarioResult, alerts: &[RiskAlert]) -> String {
    let metrics = &result.risk_metrics;
    let assessment = &result.risk_assessment;
    let summary = vec![
        vec!["Scenario".to_string(), result.scenario.name.clone()],
        vec!["Final balance".to_string(), money(result.final_balance)],
        vec!["Total invested".to_string(), money(result.total_invested)],
        vec!["Total interest".to_string(), money(result.total_interest)],
        vec!["Total return".to_string(), pct(result.total_return_pct)],
        vec!["Annualised return".to_string(), pct(result.annualized_return_pct)],
        vec!["Real return".to_string(), pct(result.real_return_pct())],
        vec!["Volatility".to_string(), pct(metrics.volatility_pct)],
        vec!["VaR 95".to_string(), pct(metrics.var_95)],
        vec!["CVaR 95".to_string(), pct(metrics.cvar_95)],
        vec!["Max drawdown".to_string(), pct(metrics.max_drawdown_pct)],
        vec!["Sharpe".to_string(), format!("{:.3}", metrics.sharpe_ratio)],
        vec!["Sortino".to_string(), format!("{:.3}", metrics.sortino_ratio)],
        vec![
            "Risk".to_string(),
            format!("{} ({:.0})", assessment.level, assessment.score),
        ],
        vec!["Expected max loss".to_string(), money(assessment.expected_max_loss)],
    ];
    let mut out = render_table(&["Metric", "Value"], &summary);

    let evolution: Vec<Vec<String>> = result
        .evolution
        .iter()
        .map(|r| {
            vec![
                r.month.to_string(),
                money(r.balance),
                money(r.interest_earned),
                format!("{:.2}", r.inflation),
                format!("{:.2}", r.interest_rate),
                money(r.inflation_adjusted_balance),
            ]
        })
        .collect();
    out.push_str(&render_table(
        &["Month", "Balance", "Interest", "Inflation", "Rate", "Real balance"],
        &evolution,
    ));

    for factor in &assessment.factors {
        out.push_str(&format!("risk factor: {} (+{:.0})\n", factor.name, factor.impact));
    }
    for alert in alerts {
        out.push_str(&format!("[{:?}] {}\n", alert.severity, alert.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_core::rng::SequenceRng;
    use econ_models::presets::PresetScenarioType;
    use econ_risk::simulation::ScenarioSimulator;

    #[test]
    fn test_render_report_lists_every_month() {
        let base = BaseSimulationInput::new(1_000.0, 100.0, 6);
        let result = ScenarioSimulator::new()
            .simulate(
                &PresetScenarioType::Pessimistic.generate(),
                Some(&base),
                &mut SequenceRng::midpoint(),
            )
            .unwrap();
        let text = render_report(&result, &[]);
        assert!(text.contains("Pessimistic"));
        assert!(text.contains("risk factor: Economic events"));
        // summary: 15 rows + 4 rules; evolution: 6 rows + 4 rules
        assert_eq!(text.lines().filter(|l| l.starts_with('│')).count(), 16 + 7);
    }
}
