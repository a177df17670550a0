//! Risk metric and assessment records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistical risk metrics derived from a monthly balance series.
///
/// Percent-valued fields are already scaled by 100. Field names are part
/// of the export contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Historical Value-at-Risk at 95 % on monthly returns (%)
    pub var_95: f64,
    /// Conditional VaR at 95 % on monthly returns (%)
    pub cvar_95: f64,
    /// Sharpe ratio on monthly returns
    pub sharpe_ratio: f64,
    /// Sortino ratio on monthly returns
    pub sortino_ratio: f64,
    /// Maximum peak-to-trough decline (%)
    pub max_drawdown_pct: f64,
    /// Annualised volatility of monthly returns (%)
    pub volatility_pct: f64,
    /// Beta against the reference benchmark (simplified)
    pub beta: f64,
    /// Jensen alpha against the reference benchmark (%, simplified)
    pub alpha: f64,
    /// Assumed correlation with the benchmark (simplified)
    pub correlation: f64,
}

/// Risk classification bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 25
    Low,
    /// Score in [25, 50)
    Medium,
    /// Score in [50, 75)
    High,
    /// Score of 75 or more
    Extreme,
}

impl RiskLevel {
    /// Classify a score.
    ///
    /// # Examples
    /// ```
    /// use econ_core::types::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_score(24.9), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_score(25.0), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_score(75.0), RiskLevel::Extreme);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            Self::Low
        } else if score < 50.0 {
            Self::Medium
        } else if score < 75.0 {
            Self::High
        } else {
            Self::Extreme
        }
    }

    /// Get the lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule that contributed to a risk score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Short name
    pub name: String,
    /// Score points contributed
    pub impact: f64,
    /// Likelihood that the factor materialises (%)
    pub probability: f64,
    /// Explanation
    pub description: String,
    /// Suggested mitigations
    pub mitigations: Vec<String>,
}

/// Heuristic risk assessment of a scenario result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk bucket
    pub level: RiskLevel,
    /// Additive score in [0, 100]
    pub score: f64,
    /// Triggered rules
    pub factors: Vec<RiskFactor>,
    /// Estimated probability of loss (%)
    pub loss_probability: f64,
    /// Estimated worst-case loss in currency units
    pub expected_max_loss: f64,
}

impl Default for RiskAssessment {
    fn default() -> Self {
        Self {
            level: RiskLevel::Low,
            score: 0.0,
            factors: Vec::new(),
            loss_probability: 0.0,
            expected_max_loss: 0.0,
        }
    }
}
