//! Rule-based risk scoring.
//!
//! The score is additive over a fixed set of rules. Threshold comparisons
//! are strict: a mean inflation of exactly 6.0 does not trigger.
//!
//! | Rule            | Condition                     | Points |
//! |-----------------|-------------------------------|--------|
//! | High inflation  | mean monthly inflation > 6    | 30     |
//! | High volatility | annualised volatility > 25    | 25     |
//! | Economic events | scenario defines any event    | 20     |

use econ_core::types::RiskFactor;

/// Mean inflation (% per year) above which the inflation rule triggers.
pub const INFLATION_THRESHOLD: f64 = 6.0;

/// Annualised volatility (%) above which the volatility rule triggers.
pub const VOLATILITY_THRESHOLD: f64 = 25.0;

/// Upper bound of the loss probability (%).
pub const MAX_LOSS_PROBABILITY: f64 = 80.0;

/// Share of the final balance at risk at a score of 100.
pub const MAX_LOSS_SHARE: f64 = 0.3;

/// Scoring rules and their fixed factor descriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskRule {
    /// Persistent inflation erodes real returns
    HighInflation,
    /// Volatile returns widen the outcome range
    HighVolatility,
    /// Discrete events add shock exposure
    EconomicEvents,
}

impl RiskRule {
    /// Get all rules in evaluation order.
    pub fn all() -> [Self; 3] {
        [Self::HighInflation, Self::HighVolatility, Self::EconomicEvents]
    }

    /// Score points contributed when the rule triggers.
    pub fn points(&self) -> f64 {
        match self {
            Self::HighInflation => 30.0,
            Self::HighVolatility => 25.0,
            Self::EconomicEvents => 20.0,
        }
    }

    /// Check whether the rule triggers.
    pub fn triggers(&self, mean_inflation: f64, volatility_pct: f64, has_events: bool) -> bool {
        match self {
            Self::HighInflation => mean_inflation > INFLATION_THRESHOLD,
            Self::HighVolatility => volatility_pct > VOLATILITY_THRESHOLD,
            Self::EconomicEvents => has_events,
        }
    }

    /// Fixed catalog entry describing the rule.
    pub fn factor(&self) -> RiskFactor {
        let (name, probability, description, mitigations): (&str, f64, &str, &[&str]) = match self
        {
            Self::HighInflation => (
                "High inflation",
                70.0,
                "Average inflation above 6% per year erodes purchasing power and real returns",
                &[
                    "Allocate part of the portfolio to inflation-linked bonds",
                    "Review real return targets",
                    "Increase exposure to real assets",
                ],
            ),
            Self::HighVolatility => (
                "High volatility",
                60.0,
                "Annualised volatility above 25% widens the range of outcomes and drawdowns",
                &[
                    "Diversify across asset classes",
                    "Rebalance periodically",
                    "Consider a longer investment horizon",
                ],
            ),
            Self::EconomicEvents => (
                "Economic events",
                50.0,
                "Scheduled economic events expose the trajectory to discrete shocks",
                &[
                    "Keep an emergency reserve",
                    "Stagger contributions around event windows",
                    "Run stress tests on the event scenarios",
                ],
            ),
        };
        RiskFactor {
            name: name.to_string(),
            impact: self.points(),
            probability,
            description: description.to_string(),
            mitigations: mitigations.iter().map(|m| m.to_string()).collect(),
        }
    }
}
