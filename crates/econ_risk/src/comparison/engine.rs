//! Comparison of scenario results.

use econ_core::math::{pearson_correlation, simple_returns};
use econ_core::types::{EconError, EconResult, ScenarioKind, ScenarioResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder correlation between any two distinct scenarios.
pub const PLACEHOLDER_CORRELATION: f64 = 0.7;

/// Confidence attached to every recommendation.
pub const RECOMMENDATION_CONFIDENCE: f64 = 0.85;

/// Spread (% of the minimum) above which variability is high.
pub const HIGH_VARIABILITY_PCT: f64 = 50.0;

/// Spread (% of the minimum) above which variability is moderate.
pub const MODERATE_VARIABILITY_PCT: f64 = 25.0;

/// How the scenario correlation matrix is filled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    /// Fixed off-diagonal value
    Placeholder(f64),
    /// Pearson correlation of the monthly return series
    Pearson,
}

impl Default for CorrelationMethod {
    fn default() -> Self {
        Self::Placeholder(PLACEHOLDER_CORRELATION)
    }
}

/// Variability tier of the compared outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variability {
    /// Spread of at most 25 %
    Low,
    /// Spread above 25 %
    Moderate,
    /// Spread above 50 %
    High,
}

impl Variability {
    /// Classify the spread `diff_max / min * 100`.
    ///
    /// A zero minimum with a positive spread is high; no spread at all is low.
    pub fn classify(diff_max: f64, min: f64) -> Self {
        if min <= 0.0 {
            return if diff_max > 0.0 { Self::High } else { Self::Low };
        }
        let spread_pct = diff_max / min * 100.0;
        if spread_pct > HIGH_VARIABILITY_PCT {
            Self::High
        } else if spread_pct > MODERATE_VARIABILITY_PCT {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Fixed advice for the tier.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::High => {
                "High variability between scenarios: diversify and consider protective strategies"
            }
            Self::Moderate => {
                "Moderate variability between scenarios: review the allocation and rebalance periodically"
            }
            Self::Low => "Low variability between scenarios: the plan is robust across the analysed scenarios",
        }
    }
}

impl fmt::Display for Variability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Spread of the final balances.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDifferences {
    /// `max - min` final balance
    pub max: f64,
    /// Mean final balance
    pub avg: f64,
}

/// Tiered recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Variability tier
    pub variability: Variability,
    /// Advice text
    pub text: String,
    /// Fixed confidence in [0, 1]
    pub confidence: f64,
}

/// Outcome of a comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Compared scenario ids, in input order
    pub scenario_ids: Vec<String>,
    /// Id of the result with the highest final balance
    pub best_scenario_id: String,
    /// Id of the result with the lowest final balance
    pub worst_scenario_id: String,
    /// Id of the realistic result, or the first one
    pub most_likely_scenario_id: String,
    /// Spread of the final balances
    pub differences: ScenarioDifferences,
    /// Symmetric matrix in input order with a unit diagonal
    pub correlation_matrix: Vec<Vec<f64>>,
    /// Recommendation
    pub recommendation: Recommendation,
}

/// Ranks and contrasts scenario results.
///
/// # Examples
///
/// ```rust
/// use econ_core::types::BaseSimulationInput;
/// use econ_models::presets::PresetScenarioType;
/// use econ_risk::comparison::ComparisonEngine;
/// use econ_risk::simulation::ScenarioSimulator;
///
/// let base = BaseSimulationInput::new(10_000.0, 500.0, 12);
/// let sim = ScenarioSimulator::new();
/// let results: Vec<_> = PresetScenarioType::all()
///     .iter()
///     .map(|p| sim.simulate_seeded(&p.generate(), &base, 42).unwrap())
///     .collect();
///
/// let comparison = ComparisonEngine::new().compare(&results).unwrap();
/// assert_eq!(comparison.most_likely_scenario_id, "realistic");
/// assert_eq!(comparison.correlation_matrix.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ComparisonEngine {
    method: CorrelationMethod,
}

impl ComparisonEngine {
    /// Create an engine with the placeholder correlation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the correlation method.
    pub fn with_method(mut self, method: CorrelationMethod) -> Self {
        self.method = method;
        self
    }

    /// Returns the correlation method.
    pub fn method(&self) -> CorrelationMethod {
        self.method
    }

    /// Compare at least two results.
    ///
    /// Ties for best or worst go to the earliest result.
    ///
    /// # Errors
    /// `InsufficientScenarios` for fewer than two results.
    pub fn compare(&self, results: &[ScenarioResult]) -> EconResult<ComparisonResult> {
        if results.len() < 2 {
            return Err(EconError::InsufficientScenarios { got: results.len() });
        }

        let mut best = &results[0];
        let mut worst = &results[0];
        for result in &results[1..] {
            if result.final_balance > best.final_balance {
                best = result;
            }
            if result.final_balance < worst.final_balance {
                worst = result;
            }
        }
        let most_likely = results
            .iter()
            .find(|r| r.scenario.kind == ScenarioKind::Realistic)
            .unwrap_or(&results[0]);

        let diff_max = best.final_balance - worst.final_balance;
        let avg = results.iter().map(|r| r.final_balance).sum::<f64>() / results.len() as f64;
        let variability = Variability::classify(diff_max, worst.final_balance);

        tracing::info!(
            scenarios = results.len(),
            best = %best.scenario_id,
            worst = %worst.scenario_id,
            %variability,
            "scenarios compared"
        );

        Ok(ComparisonResult {
            scenario_ids: results.iter().map(|r| r.scenario_id.clone()).collect(),
            best_scenario_id: best.scenario_id.clone(),
            worst_scenario_id: worst.scenario_id.clone(),
            most_likely_scenario_id: most_likely.scenario_id.clone(),
            differences: ScenarioDifferences { max: diff_max, avg },
            correlation_matrix: self.correlation_matrix(results),
            recommendation: Recommendation {
                variability,
                text: variability.advice().to_string(),
                confidence: RECOMMENDATION_CONFIDENCE,
            },
        })
    }

    /// Correlation matrix of the results in input order.
    pub fn correlation_matrix(&self, results: &[ScenarioResult]) -> Vec<Vec<f64>> {
        let n = results.len();
        let returns: Vec<Vec<f64>> = match self.method {
            CorrelationMethod::Pearson => {
                results.iter().map(|r| simple_returns(&r.balances())).collect()
            }
            CorrelationMethod::Placeholder(_) => Vec::new(),
        };

        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            matrix[i][i] = 1.0;
            for j in (i + 1)..n {
                let rho = match self.method {
                    CorrelationMethod::Placeholder(value) => value,
                    CorrelationMethod::Pearson => pearson_correlation(&returns[i], &returns[j]),
                };
                matrix[i][j] = rho;
                matrix[j][i] = rho;
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use econ_core::types::{
        BaseSimulationInput, MonthlyRecord, RiskAssessment, RiskMetrics, Scenario,
        ScenarioParameters, Trajectory,
    };

    fn result(id: &str, kind: ScenarioKind, balances: &[f64]) -> ScenarioResult {
        let scenario = Scenario::new(
            id,
            id,
            kind,
            ScenarioParameters::new(Trajectory::constant(4.0), Trajectory::constant(10.0)),
        );
        let evolution: Vec<MonthlyRecord> = balances
            .iter()
            .enumerate()
            .map(|(i, &balance)| MonthlyRecord {
                month: i as u32 + 1,
                balance,
                contribution: 0.0,
                interest_earned: 0.0,
                inflation: 4.0,
                interest_rate: 10.0,
                inflation_adjusted_balance: balance,
                purchasing_power: 100.0,
                volatility: 15.0,
            })
            .collect();
        ScenarioResult {
            scenario_id: id.to_string(),
            scenario,
            base_input: BaseSimulationInput::new(balances[0], 0.0, balances.len() as u32),
            final_balance: *balances.last().unwrap(),
            total_invested: balances[0],
            total_interest: 0.0,
            total_return_pct: 0.0,
            annualized_return_pct: 0.0,
            evolution,
            risk_metrics: RiskMetrics::default(),
            risk_assessment: RiskAssessment::default(),
        }
    }

    #[test]
    fn test_insufficient() {
        let one = [result("a", ScenarioKind::Custom, &[100.0, 110.0])];
        assert_eq!(
            ComparisonEngine::new().compare(&one),
            Err(EconError::InsufficientScenarios { got: 1 })
        );
        assert_eq!(
            ComparisonEngine::new().compare(&[]),
            Err(EconError::InsufficientScenarios { got: 0 })
        );
    }

    #[test]
    fn test_best_worst_and_spread() {
        let results = [
            result("a", ScenarioKind::Optimistic, &[100.0, 150.0]),
            result("b", ScenarioKind::Realistic, &[100.0, 120.0]),
            result("c", ScenarioKind::Pessimistic, &[100.0, 90.0]),
        ];
        let cmp = ComparisonEngine::new().compare(&results).unwrap();
        assert_eq!(cmp.best_scenario_id, "a");
        assert_eq!(cmp.worst_scenario_id, "c");
        assert_eq!(cmp.most_likely_scenario_id, "b");
        assert_relative_eq!(cmp.differences.max, 60.0);
        assert_relative_eq!(cmp.differences.avg, 120.0);
        // 60 / 90 = 66.7 %
        assert_eq!(cmp.recommendation.variability, Variability::High);
        assert_eq!(cmp.recommendation.confidence, 0.85);
        assert_eq!(cmp.scenario_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_most_likely_falls_back_to_first() {
        let results = [
            result("x", ScenarioKind::Custom, &[100.0, 101.0]),
            result("y", ScenarioKind::Optimistic, &[100.0, 102.0]),
        ];
        let cmp = ComparisonEngine::new().compare(&results).unwrap();
        assert_eq!(cmp.most_likely_scenario_id, "x");
        assert_eq!(cmp.recommendation.variability, Variability::Low);
    }

    #[test]
    fn test_placeholder_matrix() {
        let results = [
            result("a", ScenarioKind::Custom, &[100.0, 110.0]),
            result("b", ScenarioKind::Custom, &[100.0, 120.0]),
            result("c", ScenarioKind::Custom, &[100.0, 130.0]),
        ];
        let m = ComparisonEngine::new().correlation_matrix(&results);
        for i in 0..3 {
            assert_eq!(m[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(m[i][j], m[j][i]);
                if i != j {
                    assert_eq!(m[i][j], 0.7);
                }
            }
        }
    }

    #[test]
    fn test_pearson_matrix() {
        let results = [
            result("a", ScenarioKind::Custom, &[100.0, 110.0, 99.0, 120.0]),
            result("b", ScenarioKind::Custom, &[100.0, 110.0, 99.0, 120.0]),
            result("c", ScenarioKind::Custom, &[100.0, 100.0, 100.0, 100.0]),
        ];
        let m = ComparisonEngine::new()
            .with_method(CorrelationMethod::Pearson)
            .correlation_matrix(&results);
        assert_relative_eq!(m[0][1], 1.0, epsilon = 1e-12);
        assert_eq!(m[0][2], 0.0);
        assert_eq!(m[2][2], 1.0);
    }

    #[test]
    fn test_variability_tiers() {
        assert_eq!(Variability::classify(30.0, 100.0), Variability::Moderate);
        assert_eq!(Variability::classify(25.0, 100.0), Variability::Low);
        assert_eq!(Variability::classify(10.0, 0.0), Variability::High);
        assert_eq!(Variability::classify(0.0, 0.0), Variability::Low);
    }
}
