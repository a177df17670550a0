//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The helpers below
//! resolve the scenario catalog and the engines shared by the commands.

pub mod check;
pub mod compare;
pub mod paths;
pub mod simulate;
pub mod stress;

use std::path::Path;

use econ_core::types::{Scenario, ScenarioKind};
use econ_risk::analyzer::{AnalyzerConfig, RiskAnalyzer};
use econ_risk::catalog::{CatalogError, ScenarioCatalog};
use econ_risk::simulation::ScenarioSimulator;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Build the scenario simulator from the configuration.
pub fn simulator(config: &CliConfig) -> Result<ScenarioSimulator> {
    let analyzer_config = AnalyzerConfig::default().with_risk_free_rate(config.risk_free_rate)?;
    let analyzer = RiskAnalyzer::with_config(analyzer_config)?;
    Ok(ScenarioSimulator::new().with_analyzer(analyzer))
}

/// Load scenarios from a JSON array file, or use the presets.
pub fn load_catalog(path: Option<&Path>, config: &CliConfig) -> Result<ScenarioCatalog> {
    let mut catalog = match path {
        None => ScenarioCatalog::with_presets(),
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            let scenarios: Vec<Scenario> = serde_json::from_str(&content)?;
            info!(path = %path.display(), scenarios = scenarios.len(), "catalog loaded");
            ScenarioCatalog::from_scenarios(scenarios)?
        }
    };
    catalog.set_thresholds(config.alerts);
    Ok(catalog.with_simulator(simulator(config)?))
}

/// Resolve a scenario by id, falling back to the first scenario of a kind.
pub fn resolve_scenario<'a>(catalog: &'a ScenarioCatalog, key: &str) -> Result<&'a Scenario> {
    if let Some(scenario) = catalog.get(key) {
        return Ok(scenario);
    }
    ScenarioKind::parse(key)
        .and_then(|kind| catalog.scenarios().iter().find(|s| s.kind == kind))
        .ok_or_else(|| CatalogError::ScenarioNotFound(key.to_string()).into())
}
