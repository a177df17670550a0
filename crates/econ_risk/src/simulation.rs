//! Scenario simulation with attached risk analytics.
//!
//! [`ScenarioSimulator`] wraps the month-by-month [`PathSimulator`] and the
//! [`RiskAnalyzer`] so that a single call yields a complete
//! [`ScenarioResult`]. It also runs seeded batches of independent paths
//! to describe the distribution of final balances.

use crate::analyzer::RiskAnalyzer;
use crate::parallel::{parallel_map_indices, ParallelConfig};
use econ_core::math::{empirical_quantile, mean};
use econ_core::rng::{ScenarioRng, UniformSource};
use econ_core::types::{
    BaseSimulationInput, EconError, EconResult, Scenario, ScenarioResult,
};
use econ_models::simulator::PathSimulator;
use serde::{Deserialize, Serialize};

/// Distribution of final balances over independent seeded paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathDistribution {
    /// Scenario the paths were simulated for
    pub scenario_id: String,
    /// Seed of the first path; path `i` uses `seed + i`
    pub seed: u64,
    /// Final balances, ascending
    pub final_balances: Vec<f64>,
    /// Mean final balance
    pub mean: f64,
    /// 5th percentile of the final balance
    pub p5: f64,
    /// Median final balance
    pub p50: f64,
    /// 95th percentile of the final balance
    pub p95: f64,
    /// Share of paths ending below the total invested amount
    pub probability_of_loss: f64,
}

/// Path simulator plus risk analyser.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScenarioSimulator {
    paths: PathSimulator,
    analyzer: RiskAnalyzer,
    parallel: ParallelConfig,
}

impl ScenarioSimulator {
    /// Create a simulator with default components.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the path simulator.
    pub fn with_path_simulator(mut self, paths: PathSimulator) -> Self {
        self.paths = paths;
        self
    }

    /// Replace the risk analyser.
    pub fn with_analyzer(mut self, analyzer: RiskAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Replace the parallel execution settings for path batches.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the risk analyser.
    pub fn analyzer(&self) -> &RiskAnalyzer {
        &self.analyzer
    }

    /// Simulate one scenario and attach its risk metrics and assessment.
    ///
    /// # Errors
    /// - `MissingBaseSimulation` when `base` is `None`
    /// - `InvalidHorizon` when the horizon is shorter than one month
    /// - `InvalidInput` / `DegenerateTrajectory` from the path simulation
    pub fn simulate<R>(
        &self,
        scenario: &Scenario,
        base: Option<&BaseSimulationInput>,
        rng: &mut R,
    ) -> EconResult<ScenarioResult>
    where
        R: UniformSource + ?Sized,
    {
        let base = base.ok_or(EconError::MissingBaseSimulation)?;
        let path = self.paths.run(scenario, base, rng)?;
        let (risk_metrics, risk_assessment) = self.analyzer.analyze(&path.evolution, scenario);

        Ok(ScenarioResult {
            scenario_id: scenario.id.clone(),
            scenario: scenario.clone(),
            base_input: *base,
            final_balance: path.final_balance,
            total_invested: path.total_invested,
            total_interest: path.total_interest,
            total_return_pct: path.total_return_pct,
            annualized_return_pct: path.annualized_return_pct,
            evolution: path.evolution,
            risk_metrics,
            risk_assessment,
        })
    }

    /// Simulate one scenario with a generator seeded from `seed`.
    pub fn simulate_seeded(
        &self,
        scenario: &Scenario,
        base: &BaseSimulationInput,
        seed: u64,
    ) -> EconResult<ScenarioResult> {
        let mut rng = ScenarioRng::from_seed(seed);
        self.simulate(scenario, Some(base), &mut rng)
    }

    /// Run `n_paths` independent paths and summarise the final balances.
    ///
    /// Path `i` draws from `ScenarioRng::for_stream(seed, i)`, so the
    /// result does not depend on how the batch is scheduled.
    ///
    /// # Errors
    /// - `InvalidInput` when `n_paths` is zero
    /// - any error of the path simulation
    pub fn simulate_paths(
        &self,
        scenario: &Scenario,
        base: &BaseSimulationInput,
        n_paths: usize,
        seed: u64,
    ) -> EconResult<PathDistribution> {
        if n_paths == 0 {
            return Err(EconError::invalid_input("n_paths must be at least 1"));
        }
        base.validate()?;

        let outcomes = parallel_map_indices(n_paths, &self.parallel, |i| {
            let mut rng = ScenarioRng::for_stream(seed, i as u64);
            self.paths
                .run(scenario, base, &mut rng)
                .map(|path| path.final_balance)
        });
        let mut final_balances = outcomes.into_iter().collect::<EconResult<Vec<f64>>>()?;
        final_balances.sort_by(f64::total_cmp);

        let invested = base.total_invested();
        let losses = final_balances.iter().filter(|&&b| b < invested).count();
        let distribution = PathDistribution {
            scenario_id: scenario.id.clone(),
            seed,
            mean: mean(&final_balances),
            p5: empirical_quantile(&final_balances, 0.05).unwrap_or(0.0),
            p50: empirical_quantile(&final_balances, 0.5).unwrap_or(0.0),
            p95: empirical_quantile(&final_balances, 0.95).unwrap_or(0.0),
            probability_of_loss: losses as f64 / n_paths as f64,
            final_balances,
        };

        tracing::info!(
            scenario = %scenario.id,
            n_paths,
            seed,
            mean = distribution.mean,
            "path batch simulated"
        );
        Ok(distribution)
    }
}
