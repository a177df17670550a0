//! In-memory scenario catalog.

use super::alerts::{AlertSeverity, AlertThresholds, RiskAlert};
use super::error::{CatalogError, CatalogResult};
use crate::comparison::{ComparisonEngine, ComparisonResult};
use crate::parallel::{parallel_map, ParallelConfig};
use crate::simulation::ScenarioSimulator;
use crate::stress::{RecoverySpec, Shock, StressTestEngine, StressTestResult};
use econ_core::rng::ScenarioRng;
use econ_core::types::{BaseSimulationInput, Scenario, ScenarioResult};
use econ_models::presets::PresetScenarioType;

/// Ordered collection of scenarios plus the engines that run them.
///
/// Scenarios keep insertion order; batch outputs follow it. Each scenario
/// of a batch draws from its own generator seeded with `seed + position`
/// in the active set.
///
/// # Examples
///
/// ```rust
/// use econ_core::types::BaseSimulationInput;
/// use econ_risk::catalog::ScenarioCatalog;
///
/// let mut catalog = ScenarioCatalog::with_presets();
/// catalog.set_active("optimistic", false).unwrap();
///
/// let base = BaseSimulationInput::new(10_000.0, 500.0, 12);
/// let results = catalog.run_active(&base, 42).unwrap();
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].scenario_id, "realistic");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    thresholds: AlertThresholds,
    simulator: ScenarioSimulator,
    comparison: ComparisonEngine,
    stress: StressTestEngine,
    parallel: ParallelConfig,
}

impl ScenarioCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the optimistic, realistic and
    /// pessimistic presets.
    pub fn with_presets() -> Self {
        let mut catalog = Self::new();
        catalog.scenarios = PresetScenarioType::all()
            .iter()
            .map(|preset| preset.generate())
            .collect();
        catalog
    }

    /// Build a catalog from scenarios, rejecting duplicate ids.
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for scenario in scenarios {
            catalog.add(scenario)?;
        }
        Ok(catalog)
    }

    /// Replace the scenario simulator.
    pub fn with_simulator(mut self, simulator: ScenarioSimulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Replace the comparison engine.
    pub fn with_comparison(mut self, comparison: ComparisonEngine) -> Self {
        self.comparison = comparison;
        self
    }

    /// Replace the parallel execution settings for batch runs.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Add a scenario.
    ///
    /// # Errors
    /// `DuplicateScenario` if the id is already present.
    pub fn add(&mut self, scenario: Scenario) -> CatalogResult<()> {
        if self.position(&scenario.id).is_some() {
            return Err(CatalogError::DuplicateScenario(scenario.id));
        }
        tracing::info!(scenario = %scenario.id, "scenario added");
        self.scenarios.push(scenario);
        Ok(())
    }

    /// Replace the scenario with the same id and refresh its timestamp.
    ///
    /// The creation timestamp of the stored scenario is kept.
    ///
    /// # Errors
    /// `ScenarioNotFound` if the id is unknown.
    pub fn update(&mut self, mut scenario: Scenario) -> CatalogResult<()> {
        let idx = self
            .position(&scenario.id)
            .ok_or_else(|| CatalogError::ScenarioNotFound(scenario.id.clone()))?;
        scenario.created_at = self.scenarios[idx].created_at;
        scenario.touch();
        tracing::info!(scenario = %scenario.id, "scenario updated");
        self.scenarios[idx] = scenario;
        Ok(())
    }

    /// Remove a scenario and return it.
    ///
    /// # Errors
    /// `ScenarioNotFound` if the id is unknown.
    pub fn remove(&mut self, id: &str) -> CatalogResult<Scenario> {
        let idx = self
            .position(id)
            .ok_or_else(|| CatalogError::ScenarioNotFound(id.to_string()))?;
        tracing::info!(scenario = id, "scenario removed");
        Ok(self.scenarios.remove(idx))
    }

    /// Look up a scenario by id.
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// All scenarios in insertion order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Toggle the active flag of a scenario.
    ///
    /// # Errors
    /// `ScenarioNotFound` if the id is unknown.
    pub fn set_active(&mut self, id: &str, active: bool) -> CatalogResult<()> {
        let idx = self
            .position(id)
            .ok_or_else(|| CatalogError::ScenarioNotFound(id.to_string()))?;
        let scenario = &mut self.scenarios[idx];
        if scenario.active != active {
            scenario.active = active;
            scenario.touch();
            tracing::info!(scenario = id, active, "scenario activation changed");
        }
        Ok(())
    }

    /// Active scenarios in insertion order.
    pub fn active(&self) -> Vec<&Scenario> {
        self.scenarios.iter().filter(|s| s.active).collect()
    }

    /// Alert thresholds.
    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Replace the alert thresholds.
    pub fn set_thresholds(&mut self, thresholds: AlertThresholds) {
        self.thresholds = thresholds;
    }

    /// Simulate one scenario with a generator seeded from `seed`.
    ///
    /// # Errors
    /// `ScenarioNotFound` for an unknown id, `Engine` for simulation errors.
    pub fn simulate(
        &self,
        id: &str,
        base: &BaseSimulationInput,
        seed: u64,
    ) -> CatalogResult<ScenarioResult> {
        let scenario = self
            .get(id)
            .ok_or_else(|| CatalogError::ScenarioNotFound(id.to_string()))?;
        Ok(self.simulator.simulate_seeded(scenario, base, seed)?)
    }

    /// Simulate every active scenario.
    ///
    /// # Errors
    /// `NoActiveScenarios` when nothing is active, `Engine` for the first
    /// failing simulation in catalog order.
    pub fn run_active(
        &self,
        base: &BaseSimulationInput,
        seed: u64,
    ) -> CatalogResult<Vec<ScenarioResult>> {
        let active = self.active();
        if active.is_empty() {
            return Err(CatalogError::NoActiveScenarios);
        }
        base.validate()?;

        let indexed: Vec<(u64, &Scenario)> = (0u64..).zip(active).collect();
        let results = parallel_map(&indexed, &self.parallel, |&(index, scenario)| {
            let mut rng = ScenarioRng::for_stream(seed, index);
            self.simulator.simulate(scenario, Some(base), &mut rng)
        });
        let results = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        tracing::info!(scenarios = results.len(), seed, "active scenarios simulated");
        Ok(results)
    }

    /// Simulate and compare the active set.
    ///
    /// # Errors
    /// As [`run_active`](Self::run_active), plus `Engine(InsufficientScenarios)`
    /// with fewer than two active scenarios.
    pub fn compare_active(
        &self,
        base: &BaseSimulationInput,
        seed: u64,
    ) -> CatalogResult<(Vec<ScenarioResult>, ComparisonResult)> {
        let results = self.run_active(base, seed)?;
        let comparison = self.comparison.compare(&results)?;
        Ok((results, comparison))
    }

    /// Evaluate a result against the alert thresholds.
    pub fn evaluate_alerts(&self, result: &ScenarioResult) -> Vec<RiskAlert> {
        let alerts = self.thresholds.evaluate(result);
        for alert in &alerts {
            match alert.severity {
                AlertSeverity::Critical => tracing::warn!(
                    scenario = %alert.scenario_id,
                    metric = %alert.metric,
                    observed = alert.observed,
                    threshold = alert.threshold,
                    "critical risk alert"
                ),
                AlertSeverity::Warning => tracing::warn!(
                    scenario = %alert.scenario_id,
                    metric = %alert.metric,
                    observed = alert.observed,
                    threshold = alert.threshold,
                    "risk alert"
                ),
            }
        }
        alerts
    }

    /// Stress test the base plan.
    ///
    /// # Errors
    /// `Engine(InvalidInput)` for an empty shock list or invalid shock.
    pub fn stress_test(
        &self,
        base: &BaseSimulationInput,
        shocks: &[Shock],
        recovery: &RecoverySpec,
    ) -> CatalogResult<StressTestResult> {
        Ok(self.stress.run(base, shocks, recovery)?)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stress::ShockKind;
    use econ_core::types::{EconError, ScenarioKind, ScenarioParameters, Trajectory};

    fn custom(id: &str) -> Scenario {
        Scenario::new(
            id,
            id,
            ScenarioKind::Custom,
            ScenarioParameters::new(Trajectory::constant(3.0), Trajectory::constant(9.0)),
        )
    }

    fn base() -> BaseSimulationInput {
        BaseSimulationInput::new(10_000.0, 500.0, 12)
    }

    #[test]
    fn test_crud() {
        let mut catalog = ScenarioCatalog::new();
        assert!(catalog.is_empty());
        catalog.add(custom("a")).unwrap();
        assert_eq!(
            catalog.add(custom("a")),
            Err(CatalogError::DuplicateScenario("a".to_string()))
        );

        let mut changed = custom("a");
        changed.name = "Renamed".to_string();
        catalog.update(changed).unwrap();
        assert_eq!(catalog.get("a").map(|s| s.name.as_str()), Some("Renamed"));
        assert_eq!(
            catalog.update(custom("zz")),
            Err(CatalogError::ScenarioNotFound("zz".to_string()))
        );

        assert_eq!(catalog.remove("a").unwrap().id, "a");
        assert!(catalog.remove("a").is_err());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_active_set() {
        let mut catalog = ScenarioCatalog::with_presets();
        assert_eq!(catalog.active().len(), 3);
        catalog.set_active("pessimistic", false).unwrap();
        let ids: Vec<_> = catalog.active().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["optimistic", "realistic"]);
        assert!(catalog.set_active("missing", true).is_err());
    }

    #[test]
    fn test_run_active_empty() {
        let mut catalog = ScenarioCatalog::new();
        catalog.add(custom("a").with_active(false)).unwrap();
        assert_eq!(
            catalog.run_active(&base(), 1).unwrap_err(),
            CatalogError::NoActiveScenarios
        );
    }

    #[test]
    fn test_run_active_independent_of_parallelism() {
        let catalog = ScenarioCatalog::with_presets();
        let parallel = catalog.clone().with_parallel(ParallelConfig::new(1));
        let sequential = catalog.with_parallel(ParallelConfig::sequential());

        let a = parallel.run_active(&base(), 9).unwrap();
        let b = sequential.run_active(&base(), 9).unwrap();
        assert_eq!(a.len(), 3);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.final_balance, y.final_balance);
            assert_eq!(x.evolution, y.evolution);
        }
    }

    #[test]
    fn test_compare_active_needs_two() {
        let mut catalog = ScenarioCatalog::with_presets();
        catalog.set_active("optimistic", false).unwrap();
        catalog.set_active("pessimistic", false).unwrap();
        assert_eq!(
            catalog.compare_active(&base(), 1).unwrap_err(),
            CatalogError::Engine(EconError::InsufficientScenarios { got: 1 })
        );
    }

    #[test]
    fn test_stress_and_alerts() {
        let catalog = ScenarioCatalog::with_presets();
        let stress = catalog
            .stress_test(
                &base(),
                &[Shock::new(ShockKind::MarketCrash, 60.0, 6)],
                &RecoverySpec::default(),
            )
            .unwrap();
        assert_eq!(stress.critical_shocks, vec![ShockKind::MarketCrash]);

        let result = catalog.simulate("pessimistic", &base(), 3).unwrap();
        let alerts = catalog.evaluate_alerts(&result);
        // pessimistic preset scores at least 50 from inflation and events alone
        assert!(result.risk_assessment.score >= 50.0);
        assert!(alerts.iter().all(|a| a.scenario_id == "pessimistic"));
    }
}
