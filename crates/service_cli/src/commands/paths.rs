//! Paths command implementation
//!
//! Runs a batch of independently seeded paths for one scenario and
//! summarises the distribution of final balances.

use std::path::Path;

use econ_core::types::BaseSimulationInput;
use econ_risk::simulation::PathDistribution;
use serde::Serialize;
use tracing::info;

use super::{load_catalog, resolve_scenario, simulator};
use crate::config::{CliConfig, OutputFormat};
use crate::output::{money, print_csv, print_json, render_table};
use crate::Result;

#[derive(Serialize)]
struct RankedBalance {
    rank: usize,
    final_balance: f64,
}

/// Run the paths command
pub fn run(
    config: &CliConfig,
    base: &BaseSimulationInput,
    seed: u64,
    scenario: &str,
    catalog: Option<&Path>,
    n_paths: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let n_paths = n_paths.unwrap_or(config.paths);
    let catalog = load_catalog(catalog, config)?;
    let scenario = resolve_scenario(&catalog, scenario)?;
    info!(scenario = %scenario.id, n_paths, seed, "starting path batch");

    let distribution = simulator(config)?.simulate_paths(scenario, base, n_paths, seed)?;

    match format {
        OutputFormat::Json => print_json(&distribution)?,
        OutputFormat::Csv => print_csv(
            distribution
                .final_balances
                .iter()
                .enumerate()
                .map(|(i, &final_balance)| RankedBalance {
                    rank: i + 1,
                    final_balance,
                }),
        )?,
        OutputFormat::Table => print!("{}", render_distribution(&distribution, base)),
    }
    Ok(())
}

fn render_distribution(distribution: &PathDistribution, base: &BaseSimulationInput) -> String {
    let min = distribution.final_balances.first().copied().unwrap_or(0.0);
    let max = distribution.final_balances.last().copied().unwrap_or(0.0);
    let rows = vec![
        vec!["Scenario".to_string(), distribution.scenario_id.clone()],
        vec!["Paths".to_string(), distribution.final_balances.len().to_string()],
        vec!["Seed".to_string(), distribution.seed.to_string()],
        vec!["Invested".to_string(), money(base.total_invested())],
        vec!["Minimum".to_string(), money(min)],
        vec!["P5".to_string(), money(distribution.p5)],
        vec!["Median".to_string(), money(distribution.p50)],
        vec!["Mean".to_string(), money(distribution.mean)],
        vec!["P95".to_string(), money(distribution.p95)],
        vec!["Maximum".to_string(), money(max)],
        vec![
            "P(loss)".to_string(),
            format!("{:.1}%", distribution.probability_of_loss * 100.0),
        ],
    ];
    render_table(&["Statistic", "Value"], &rows)
}
