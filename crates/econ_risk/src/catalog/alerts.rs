//! Threshold alerts on scenario results.
//!
//! An alert fires when an observed value is strictly beyond its threshold.
//! It is critical when the excess is more than half the threshold; for the
//! minimum real return the critical margin is at least 5 points so that
//! thresholds near zero stay usable.

use econ_core::types::ScenarioResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default alert on the heuristic risk score.
pub const DEFAULT_MAX_RISK_SCORE: f64 = 50.0;

/// Default alert on annualised volatility (%).
pub const DEFAULT_MAX_VOLATILITY_PCT: f64 = 25.0;

/// Default alert on maximum drawdown (%).
pub const DEFAULT_MAX_DRAWDOWN_PCT: f64 = 20.0;

/// Default floor on the real cumulative return (%).
pub const DEFAULT_MIN_REAL_RETURN_PCT: f64 = 0.0;

const CRITICAL_EXCESS: f64 = 0.5;
const MIN_CRITICAL_MARGIN: f64 = 5.0;

/// Alert limits applied to scenario results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Upper limit of the risk score
    pub max_risk_score: f64,
    /// Upper limit of annualised volatility (%)
    pub max_volatility_pct: f64,
    /// Upper limit of maximum drawdown (%)
    pub max_drawdown_pct: f64,
    /// Lower limit of the real cumulative return (%)
    pub min_real_return_pct: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            max_risk_score: DEFAULT_MAX_RISK_SCORE,
            max_volatility_pct: DEFAULT_MAX_VOLATILITY_PCT,
            max_drawdown_pct: DEFAULT_MAX_DRAWDOWN_PCT,
            min_real_return_pct: DEFAULT_MIN_REAL_RETURN_PCT,
        }
    }
}

/// Metric an alert refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertMetric {
    /// Heuristic risk score
    RiskScore,
    /// Annualised volatility
    Volatility,
    /// Maximum drawdown
    Drawdown,
    /// Real cumulative return
    RealReturn,
}

impl fmt::Display for AlertMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RiskScore => "risk score",
            Self::Volatility => "volatility",
            Self::Drawdown => "max drawdown",
            Self::RealReturn => "real return",
        };
        f.write_str(s)
    }
}

/// Alert severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Threshold breached
    Warning,
    /// Threshold breached by a wide margin
    Critical,
}

/// A triggered alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAlert {
    /// Scenario the alert refers to
    pub scenario_id: String,
    /// Metric that breached its threshold
    pub metric: AlertMetric,
    /// Observed value
    pub observed: f64,
    /// Configured threshold
    pub threshold: f64,
    /// Severity
    pub severity: AlertSeverity,
    /// Human-readable message
    pub message: String,
}

impl AlertThresholds {
    /// Evaluate a result against the thresholds.
    pub fn evaluate(&self, result: &ScenarioResult) -> Vec<RiskAlert> {
        let metrics = &result.risk_metrics;
        let mut alerts = Vec::new();

        let upper_limits = [
            (AlertMetric::RiskScore, result.risk_assessment.score, self.max_risk_score),
            (AlertMetric::Volatility, metrics.volatility_pct, self.max_volatility_pct),
            (AlertMetric::Drawdown, metrics.max_drawdown_pct, self.max_drawdown_pct),
        ];
        for (metric, observed, threshold) in upper_limits {
            if observed > threshold {
                let critical = observed > threshold + threshold.abs() * CRITICAL_EXCESS;
                alerts.push(alert(result, metric, observed, threshold, critical, "above"));
            }
        }

        let real_return = result.real_return_pct();
        let floor = self.min_real_return_pct;
        if real_return < floor {
            let margin = (floor.abs() * CRITICAL_EXCESS).max(MIN_CRITICAL_MARGIN);
            let critical = real_return < floor - margin;
            alerts.push(alert(
                result,
                AlertMetric::RealReturn,
                real_return,
                floor,
                critical,
                "below",
            ));
        }
        alerts
    }
}

fn alert(
    result: &ScenarioResult,
    metric: AlertMetric,
    observed: f64,
    threshold: f64,
    critical: bool,
    direction: &str,
) -> RiskAlert {
    let severity = if critical {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    };
    RiskAlert {
        scenario_id: result.scenario_id.clone(),
        metric,
        observed,
        threshold,
        severity,
        message: format!(
            "{}: {} {:.2} {} limit {:.2}",
            result.scenario_id, metric, observed, direction, threshold
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_core::types::{
        BaseSimulationInput, MonthlyRecord, RiskAssessment, RiskMetrics, Scenario, ScenarioKind,
        ScenarioParameters, Trajectory,
    };

    fn result(score: f64, volatility: f64, drawdown: f64, real_final: f64) -> ScenarioResult {
        let record = MonthlyRecord {
            month: 1,
            balance: real_final,
            contribution: 100.0,
            interest_earned: 0.0,
            inflation: 4.0,
            interest_rate: 10.0,
            inflation_adjusted_balance: real_final,
            purchasing_power: 100.0,
            volatility,
        };
        ScenarioResult {
            scenario_id: "s".to_string(),
            scenario: Scenario::new(
                "s",
                "S",
                ScenarioKind::Custom,
                ScenarioParameters::new(Trajectory::constant(4.0), Trajectory::constant(10.0)),
            ),
            base_input: BaseSimulationInput::new(100.0, 0.0, 1),
            final_balance: real_final,
            total_invested: 100.0,
            total_interest: real_final - 100.0,
            total_return_pct: 0.0,
            annualized_return_pct: 0.0,
            evolution: vec![record],
            risk_metrics: RiskMetrics {
                volatility_pct: volatility,
                max_drawdown_pct: drawdown,
                ..RiskMetrics::default()
            },
            risk_assessment: RiskAssessment {
                score,
                ..RiskAssessment::default()
            },
        }
    }

    #[test]
    fn test_no_alerts_within_limits() {
        let thresholds = AlertThresholds::default();
        assert!(thresholds.evaluate(&result(50.0, 25.0, 20.0, 100.0)).is_empty());
    }

    #[test]
    fn test_warning_and_critical() {
        let thresholds = AlertThresholds::default();
        let alerts = thresholds.evaluate(&result(55.0, 40.0, 10.0, 100.0));
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].metric, AlertMetric::RiskScore);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[1].metric, AlertMetric::Volatility);
        assert_eq!(alerts[1].severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_real_return_floor() {
        let thresholds = AlertThresholds::default();
        let mild = thresholds.evaluate(&result(0.0, 0.0, 0.0, 98.0));
        assert_eq!(mild.len(), 1);
        assert_eq!(mild[0].metric, AlertMetric::RealReturn);
        assert_eq!(mild[0].severity, AlertSeverity::Warning);

        let severe = thresholds.evaluate(&result(0.0, 0.0, 0.0, 80.0));
        assert_eq!(severe[0].severity, AlertSeverity::Critical);
    }
}
