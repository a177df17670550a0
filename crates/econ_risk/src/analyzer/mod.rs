//! Risk analytics over a monthly balance series.
//!
//! [`RiskAnalyzer`] derives [`RiskMetrics`] from the simple monthly
//! returns of a simulated evolution and scores the scenario with the
//! rule table in [`assessment`].
//!
//! ## Metrics
//!
//! With `r_i = (b_i - b_{i-1}) / b_{i-1}` for `i = 2..N`:
//!
//! | Metric       | Formula                                         |
//! |--------------|-------------------------------------------------|
//! | volatility   | `stdev(r) * sqrt(12) * 100`                     |
//! | VaR 95       | `100 * sorted(r)[floor(0.05 * len)]`            |
//! | CVaR 95      | `100 * mean(sorted(r)[..floor(0.05 * len)])`    |
//! | max drawdown | `100 * max (peak - b) / peak`                   |
//! | Sharpe       | `(mean - rf_m) / stdev`                         |
//! | Sortino      | `(mean - rf_m) / downside_dev`                  |
//!
//! Beta, alpha and correlation use a fixed market-correlation assumption
//! against a reference benchmark rather than an observed market series.

pub mod assessment;
mod config;

pub use assessment::RiskRule;
pub use config::{
    AnalyzerConfig, DEFAULT_BENCHMARK_RETURN_PCT, DEFAULT_BENCHMARK_VOLATILITY_PCT,
    DEFAULT_MARKET_CORRELATION, DEFAULT_RISK_FREE_RATE, DEFAULT_VAR_TAIL,
};

use assessment::{MAX_LOSS_PROBABILITY, MAX_LOSS_SHARE};
use econ_core::math::{mean, simple_returns, sorted_ascending, std_dev, tail_index};
use econ_core::types::{
    EconResult, MonthlyRecord, RiskAssessment, RiskLevel, RiskMetrics, Scenario,
};

/// Computes risk metrics and heuristic assessments.
///
/// Pure: identical inputs always produce identical outputs.
///
/// # Examples
///
/// ```rust
/// use econ_core::rng::SequenceRng;
/// use econ_core::types::BaseSimulationInput;
/// use econ_models::presets::PresetScenarioType;
/// use econ_models::simulator::PathSimulator;
/// use econ_risk::analyzer::RiskAnalyzer;
///
/// let scenario = PresetScenarioType::Realistic.generate();
/// let base = BaseSimulationInput::new(10_000.0, 500.0, 24);
/// let path = PathSimulator::new()
///     .run(&scenario, &base, &mut SequenceRng::midpoint())
///     .unwrap();
///
/// let analyzer = RiskAnalyzer::new();
/// let metrics = analyzer.metrics(&path.evolution);
/// let assessment = analyzer.assess_risk(&path.evolution, &metrics, &scenario);
/// assert!(metrics.max_drawdown_pct >= 0.0);
/// assert!(assessment.score <= 100.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RiskAnalyzer {
    config: AnalyzerConfig,
}

impl RiskAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from a validated configuration.
    pub fn with_config(config: AnalyzerConfig) -> EconResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Compute the statistical metrics of an evolution.
    ///
    /// Evolutions with fewer than two records yield all-zero metrics.
    pub fn metrics(&self, evolution: &[MonthlyRecord]) -> RiskMetrics {
        if evolution.len() < 2 {
            return RiskMetrics::default();
        }

        let balances: Vec<f64> = evolution.iter().map(|r| r.balance).collect();
        let returns = simple_returns(&balances);
        let mean_return = mean(&returns);
        let stdev = std_dev(&returns);
        let rf_monthly = self.config.risk_free_monthly();

        let volatility_pct = stdev * 12.0_f64.sqrt() * 100.0;
        let (var_95, cvar_95) = self.value_at_risk(&returns);

        let sharpe_ratio = if stdev > 0.0 {
            (mean_return - rf_monthly) / stdev
        } else {
            tracing::debug!("zero return variance, sharpe ratio set to 0");
            0.0
        };
        let sortino_ratio = match downside_deviation(&returns, mean_return) {
            Some(dd) => (mean_return - rf_monthly) / dd,
            None => {
                tracing::debug!("empty downside set, sortino ratio set to 0");
                0.0
            }
        };

        let correlation = self.config.market_correlation;
        let beta = correlation * volatility_pct / self.config.benchmark_volatility_pct;
        let rf_pct = self.config.risk_free_rate * 100.0;
        let annual_return_pct = mean_return * 12.0 * 100.0;
        let alpha =
            annual_return_pct - (rf_pct + beta * (self.config.benchmark_return_pct - rf_pct));

        RiskMetrics {
            var_95,
            cvar_95,
            sharpe_ratio,
            sortino_ratio,
            max_drawdown_pct: max_drawdown_pct(&balances),
            volatility_pct,
            beta,
            alpha,
            correlation,
        }
    }

    /// Historical VaR and CVaR (%) at the configured tail.
    fn value_at_risk(&self, returns: &[f64]) -> (f64, f64) {
        let sorted = sorted_ascending(returns);
        let Some(idx) = tail_index(sorted.len(), self.config.var_tail) else {
            return (0.0, 0.0);
        };
        let var = sorted[idx] * 100.0;
        let cvar = if idx == 0 {
            tracing::debug!(n = sorted.len(), "empty CVaR tail, set to 0");
            0.0
        } else {
            mean(&sorted[..idx]) * 100.0
        };
        (var, cvar)
    }

    /// Score a simulated evolution with the fixed rule table.
    ///
    /// Mean inflation is taken over the monthly records, volatility from
    /// `metrics`, and the event rule from the scenario definition.
    pub fn assess_risk(
        &self,
        evolution: &[MonthlyRecord],
        metrics: &RiskMetrics,
        scenario: &Scenario,
    ) -> RiskAssessment {
        let inflations: Vec<f64> = evolution.iter().map(|r| r.inflation).collect();
        let mean_inflation = mean(&inflations);
        let has_events = scenario.parameters.has_events();

        let mut score = 0.0;
        let mut factors = Vec::new();
        for rule in RiskRule::all() {
            if rule.triggers(mean_inflation, metrics.volatility_pct, has_events) {
                score += rule.points();
                factors.push(rule.factor());
            }
        }

        let final_balance = evolution.last().map_or(0.0, |r| r.balance);
        RiskAssessment {
            level: RiskLevel::from_score(score),
            score,
            factors,
            loss_probability: score.min(MAX_LOSS_PROBABILITY),
            expected_max_loss: final_balance * score / 100.0 * MAX_LOSS_SHARE,
        }
    }

    /// Compute metrics and the assessment in one call.
    pub fn analyze(
        &self,
        evolution: &[MonthlyRecord],
        scenario: &Scenario,
    ) -> (RiskMetrics, RiskAssessment) {
        let metrics = self.metrics(evolution);
        let assessment = self.assess_risk(evolution, &metrics, scenario);
        (metrics, assessment)
    }
}

/// Root mean square deviation below the mean; `None` when empty or zero.
fn downside_deviation(returns: &[f64], mean_return: f64) -> Option<f64> {
    let downside: Vec<f64> = returns
        .iter()
        .copied()
        .filter(|&r| r < mean_return)
        .collect();
    if downside.is_empty() {
        return None;
    }
    let dd = (downside
        .iter()
        .map(|r| (r - mean_return).powi(2))
        .sum::<f64>()
        / downside.len() as f64)
        .sqrt();
    (dd > 0.0).then_some(dd)
}

/// Largest peak-to-trough decline (%); non-positive peaks are skipped.
fn max_drawdown_pct(balances: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd: f64 = 0.0;
    for &b in balances {
        peak = peak.max(b);
        if peak > 0.0 {
            max_dd = max_dd.max((peak - b) / peak);
        }
    }
    max_dd * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use econ_core::types::{
        EconomicEvent, EventKind, ScenarioKind, ScenarioParameters, Trajectory,
    };

    fn records(balances: &[f64], inflation: f64) -> Vec<MonthlyRecord> {
        balances
            .iter()
            .enumerate()
            .map(|(i, &balance)| MonthlyRecord {
                month: i as u32 + 1,
                balance,
                contribution: 0.0,
                interest_earned: 0.0,
                inflation,
                interest_rate: 0.0,
                inflation_adjusted_balance: balance,
                purchasing_power: 100.0,
                volatility: 0.0,
            })
            .collect()
    }

    fn scenario() -> Scenario {
        Scenario::new(
            "s",
            "S",
            ScenarioKind::Custom,
            ScenarioParameters::new(Trajectory::constant(4.0), Trajectory::constant(10.0)),
        )
    }

    #[test]
    fn test_short_series_all_zero() {
        let analyzer = RiskAnalyzer::new();
        assert_eq!(analyzer.metrics(&[]), RiskMetrics::default());
        assert_eq!(analyzer.metrics(&records(&[100.0], 0.0)), RiskMetrics::default());
    }

    #[test]
    fn test_constant_growth_zero_volatility() {
        let balances: Vec<f64> = (0..8).map(|i| 2.0_f64.powi(i)).collect();
        let m = RiskAnalyzer::new().metrics(&records(&balances, 0.0));
        assert_eq!(m.volatility_pct, 0.0);
        assert_eq!(m.sharpe_ratio, 0.0);
        assert_eq!(m.sortino_ratio, 0.0);
        assert_eq!(m.max_drawdown_pct, 0.0);
        assert_eq!(m.var_95, 100.0);
    }

    #[test]
    fn test_drawdown_and_var() {
        // returns: +10%, -50%, +100%
        let m = RiskAnalyzer::new().metrics(&records(&[100.0, 110.0, 55.0, 110.0], 0.0));
        assert_relative_eq!(m.max_drawdown_pct, 50.0, epsilon = 1e-12);
        assert_relative_eq!(m.var_95, -50.0, epsilon = 1e-12);
        // floor(0.05 * 3) = 0 leaves an empty tail
        assert_eq!(m.cvar_95, 0.0);
        assert!(m.sortino_ratio != 0.0);
    }

    #[test]
    fn test_cvar_averages_tail() {
        // 40 returns, tail index 2: average of the two smallest
        let mut balances = vec![100.0];
        let mut returns = vec![-0.2, -0.1];
        returns.extend(std::iter::repeat(0.01).take(38));
        for r in &returns {
            let last = *balances.last().unwrap();
            balances.push(last * (1.0 + r));
        }
        let m = RiskAnalyzer::new().metrics(&records(&balances, 0.0));
        assert_relative_eq!(m.cvar_95, -15.0, epsilon = 1e-9);
        assert_relative_eq!(m.var_95, 1.0, epsilon = 1e-9);
        assert!(m.cvar_95 <= m.var_95);
    }

    #[test]
    fn test_beta_alpha_simplification() {
        let m = RiskAnalyzer::new().metrics(&records(&[100.0, 110.0, 99.0, 120.0], 0.0));
        assert_eq!(m.correlation, 0.7);
        assert_relative_eq!(m.beta, 0.7 * m.volatility_pct / 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_previous_balance() {
        let m = RiskAnalyzer::new().metrics(&records(&[0.0, 0.0, 100.0], 0.0));
        assert!(m.volatility_pct.is_finite());
        assert!(m.sharpe_ratio.is_finite());
    }

    #[test]
    fn test_assessment_rules() {
        let analyzer = RiskAnalyzer::new();
        let evolution = records(&[1_000.0, 1_000.0], 7.0);
        let metrics = RiskMetrics {
            volatility_pct: 30.0,
            ..RiskMetrics::default()
        };
        let mut s = scenario();
        s.parameters
            .events
            .push(EconomicEvent::new("e", "E", EventKind::Crisis, 1, 2));

        let a = analyzer.assess_risk(&evolution, &metrics, &s);
        assert_eq!(a.score, 75.0);
        assert_eq!(a.level, RiskLevel::Extreme);
        assert_eq!(a.loss_probability, 75.0);
        assert_relative_eq!(a.expected_max_loss, 1_000.0 * 0.75 * 0.3, epsilon = 1e-9);
        assert_eq!(a.factors.len(), 3);
    }

    #[test]
    fn test_assessment_strict_inflation() {
        let analyzer = RiskAnalyzer::new();
        let a = analyzer.assess_risk(
            &records(&[1_000.0, 1_010.0], 6.0),
            &RiskMetrics::default(),
            &scenario(),
        );
        assert_eq!(a.score, 0.0);
        assert_eq!(a.level, RiskLevel::Low);
        assert!(a.factors.is_empty());
    }
}
