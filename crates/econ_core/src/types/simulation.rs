//! Simulation inputs and outputs.

use super::error::{EconError, EconResult};
use super::risk::{RiskAssessment, RiskMetrics};
use super::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Baseline contribution plan supplied by the compound-interest calculator.
///
/// Supplied once per simulation call and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseSimulationInput {
    /// Amount invested in month one
    pub initial_value: f64,
    /// Amount contributed in every later month
    pub monthly_contribution: f64,
    /// Number of simulated months
    pub horizon_months: u32,
}

impl BaseSimulationInput {
    /// Create a base input without validation.
    pub fn new(initial_value: f64, monthly_contribution: f64, horizon_months: u32) -> Self {
        Self {
            initial_value,
            monthly_contribution,
            horizon_months,
        }
    }

    /// Validate the input.
    ///
    /// # Errors
    /// - `InvalidHorizon` if `horizon_months < 1`
    /// - `InvalidInput` if an amount is negative or not finite
    pub fn validate(&self) -> EconResult<()> {
        if self.horizon_months < 1 {
            return Err(EconError::InvalidHorizon(self.horizon_months));
        }
        if !self.initial_value.is_finite() || self.initial_value < 0.0 {
            return Err(EconError::invalid_input(format!(
                "initial_value must be a non-negative number, got {}",
                self.initial_value
            )));
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(EconError::invalid_input(format!(
                "monthly_contribution must be a non-negative number, got {}",
                self.monthly_contribution
            )));
        }
        Ok(())
    }

    /// Total amount invested over the horizon.
    pub fn total_invested(&self) -> f64 {
        self.initial_value + self.monthly_contribution * self.horizon_months.saturating_sub(1) as f64
    }
}

/// One month of a simulated trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month index, starting at 1
    pub month: u32,
    /// Nominal balance at month end
    pub balance: f64,
    /// Amount contributed this month
    pub contribution: f64,
    /// Interest credited this month (after stochastic adjustment)
    pub interest_earned: f64,
    /// Effective inflation (% per year)
    pub inflation: f64,
    /// Effective interest rate (% per year)
    pub interest_rate: f64,
    /// Balance deflated by cumulative inflation
    pub inflation_adjusted_balance: f64,
    /// Inflation-adjusted balance relative to the initial value (%)
    pub purchasing_power: f64,
    /// Volatility applied this month (%)
    pub volatility: f64,
}

/// Complete output of one scenario simulation.
///
/// Created by the simulator and consumed read-only by analysers and
/// exporters. Field names are a stable export contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Identifier of the simulated scenario
    pub scenario_id: String,
    /// Snapshot of the scenario used for the run
    pub scenario: Scenario,
    /// Base input used for the run
    pub base_input: BaseSimulationInput,
    /// Balance after the last month
    pub final_balance: f64,
    /// Sum of all contributions
    pub total_invested: f64,
    /// `final_balance - total_invested`
    pub total_interest: f64,
    /// Cumulative return (%)
    pub total_return_pct: f64,
    /// Annualised return (%)
    pub annualized_return_pct: f64,
    /// Month-by-month evolution
    pub evolution: Vec<MonthlyRecord>,
    /// Statistical risk metrics
    pub risk_metrics: RiskMetrics,
    /// Heuristic risk assessment
    pub risk_assessment: RiskAssessment,
}

impl ScenarioResult {
    /// Horizon length in months.
    pub fn horizon_months(&self) -> usize {
        self.evolution.len()
    }

    /// Balance series in month order.
    pub fn balances(&self) -> Vec<f64> {
        self.evolution.iter().map(|r| r.balance).collect()
    }

    /// Inflation-adjusted balance of the last month, if any.
    pub fn final_real_balance(&self) -> Option<f64> {
        self.evolution.last().map(|r| r.inflation_adjusted_balance)
    }

    /// Real (inflation-adjusted) cumulative return (%).
    pub fn real_return_pct(&self) -> f64 {
        match self.final_real_balance() {
            Some(real) if self.total_invested > 0.0 => (real / self.total_invested - 1.0) * 100.0,
            _ => 0.0,
        }
    }
}
