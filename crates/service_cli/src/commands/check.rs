//! Check command implementation
//!
//! Verifies the configuration and that every catalog scenario simulates.

use std::path::Path;

use econ_core::types::BaseSimulationInput;
use econ_risk::catalog::ScenarioCatalog;
use tracing::{info, warn};

use super::load_catalog;
use crate::config::CliConfig;
use crate::output::{money, render_table};
use crate::{CliError, Result};

/// Plan used to smoke-test each scenario.
const SMOKE_PLAN: BaseSimulationInput = BaseSimulationInput {
    initial_value: 10_000.0,
    monthly_contribution: 500.0,
    horizon_months: 12,
};

/// Run the check command
pub fn run(config: &CliConfig, catalog: Option<&Path>) -> Result<()> {
    let settings = vec![
        vec!["seed".to_string(), config.seed.to_string()],
        vec!["risk_free_rate".to_string(), config.risk_free_rate.to_string()],
        vec!["log_level".to_string(), config.log_level.clone()],
        vec!["output_format".to_string(), config.output_format.to_string()],
        vec!["paths".to_string(), config.paths.to_string()],
    ];
    print!("{}", render_table(&["Setting", "Value"], &settings));

    let catalog = load_catalog(catalog, config)?;
    let (rows, failures) = smoke_test(&catalog, config.seed);
    print!(
        "{}",
        render_table(&["Scenario", "Kind", "Active", "Smoke test"], &rows)
    );

    if failures > 0 {
        return Err(CliError::invalid_argument(format!(
            "{} of {} scenarios failed to simulate",
            failures,
            catalog.len()
        )));
    }
    info!(scenarios = catalog.len(), "check passed");
    Ok(())
}

fn smoke_test(catalog: &ScenarioCatalog, seed: u64) -> (Vec<Vec<String>>, usize) {
    let mut failures = 0;
    let rows = catalog
        .scenarios()
        .iter()
        .map(|scenario| {
            let outcome = match catalog.simulate(&scenario.id, &SMOKE_PLAN, seed) {
                Ok(result) => format!("ok ({})", money(result.final_balance)),
                Err(err) => {
                    warn!(scenario = %scenario.id, error = %err, "scenario smoke test failed");
                    failures += 1;
                    format!("failed: {}", err)
                }
            };
            vec![
                scenario.id.clone(),
                scenario.kind.as_str().to_string(),
                if scenario.active { "yes" } else { "no" }.to_string(),
                outcome,
            ]
        })
        .collect();
    (rows, failures)
}
