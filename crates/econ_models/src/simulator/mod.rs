//! Month-by-month balance path simulation.
//!
//! For `month = 1..=horizon` the simulator:
//!
//! ```text
//! inflation  = project(inflation)     + overlay.inflation
//! rate       = project(interest_rate) + overlay.interest_rate
//! volatility = market * (1 + A * sin(2π * month / L))
//! balance   += contribution            (initial value in month 1)
//! interest   = balance * rate / 100 / 12
//! interest  *= 1 + (u - 0.5) * volatility / 100
//! balance   += interest
//! real       = balance / (1 + inflation / 100 / 12) ^ month
//! power      = real / initial_value * 100
//! ```
//!
//! with `A = 0.3`, `L = 12` by default. With
//! [`SimulatorConfigBuilder::market_overlay`] the active events' market
//! delta is added to `market` before the seasonal factor.
//!
//! Uniform draws happen in a fixed order each month: inflation projection
//! (volatile only), rate projection (volatile only), stochastic interest
//! (always).

mod config;

pub use config::{
    ConfigError, SimulatorConfig, SimulatorConfigBuilder, DEFAULT_SEASONAL_AMPLITUDE,
    DEFAULT_SEASON_LENGTH,
};

use crate::events::EventOverlay;
use crate::trajectory::ParameterProjector;
use econ_core::rng::UniformSource;
use econ_core::types::{
    BaseSimulationInput, EconError, EconResult, MonthlyRecord, Scenario,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Balance path and aggregates of one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationPath {
    /// Month-by-month records, `horizon_months` long
    pub evolution: Vec<MonthlyRecord>,
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
}

/// Drives the stochastic balance simulation of a single scenario.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathSimulator {
    config: SimulatorConfig,
    projector: ParameterProjector,
    overlay: EventOverlay,
}

impl PathSimulator {
    /// Create a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator from a validated configuration.
    pub fn with_config(config: SimulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let projector = ParameterProjector::with_noise_ratio(config.noise_ratio())
            .map_err(|_| ConfigError::InvalidNoiseRatio(config.noise_ratio()))?;
        Ok(Self {
            config,
            projector,
            overlay: EventOverlay::new(),
        })
    }

    /// Replace the event overlay (e.g. with a clamping one).
    pub fn with_overlay(mut self, overlay: EventOverlay) -> Self {
        self.overlay = overlay;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Seasonally modulated volatility for `month`.
    #[inline]
    pub fn seasonal_volatility(&self, base_volatility: f64, month: u32) -> f64 {
        let phase = 2.0 * PI * f64::from(month) / f64::from(self.config.season_length());
        base_volatility * (1.0 + self.config.seasonal_amplitude() * phase.sin())
    }

    /// Run the simulation.
    ///
    /// # Errors
    /// - `InvalidHorizon` if `base.horizon_months < 1`
    /// - `InvalidInput` for negative or non-finite amounts
    /// - `DegenerateTrajectory` for an exponential path starting at zero
    pub fn run<R>(
        &self,
        scenario: &Scenario,
        base: &BaseSimulationInput,
        rng: &mut R,
    ) -> EconResult<SimulationPath>
    where
        R: UniformSource + ?Sized,
    {
        base.validate()?;
        let params = &scenario.parameters;
        self.projector.validate(&params.inflation)?;
        self.projector.validate(&params.interest_rate)?;

        let horizon = base.horizon_months;
        let mut evolution = Vec::with_capacity(horizon as usize);
        let mut balance = 0.0;
        let mut total_invested = 0.0;

        for month in 1..=horizon {
            let deltas = self.overlay.active_deltas(&params.events, month);
            let inflation =
                self.projector
                    .value(&params.inflation, month, horizon, rng)?
                    + deltas.inflation;
            let rate = self
                .projector
                .value(&params.interest_rate, month, horizon, rng)?
                + deltas.interest_rate;
            let market = if self.config.market_overlay() {
                params.volatility.market + deltas.market
            } else {
                params.volatility.market
            };
            let volatility = self.seasonal_volatility(market, month);

            let contribution = if month == 1 {
                base.initial_value
            } else {
                base.monthly_contribution
            };
            balance += contribution;
            total_invested += contribution;

            let monthly_interest = balance * (rate / 100.0 / 12.0);
            let interest_earned =
                monthly_interest * (1.0 + (rng.next_uniform() - 0.5) * volatility / 100.0);
            balance += interest_earned;

            let deflator = (1.0 + inflation / 100.0 / 12.0).powi(month as i32);
            let inflation_adjusted_balance = balance / deflator;
            let purchasing_power = if base.initial_value > 0.0 {
                inflation_adjusted_balance / base.initial_value * 100.0
            } else {
                0.0
            };

            evolution.push(MonthlyRecord {
                month,
                balance,
                contribution,
                interest_earned,
                inflation,
                interest_rate: rate,
                inflation_adjusted_balance,
                purchasing_power,
                volatility,
            });
        }

        let final_balance = balance;
        let (total_return_pct, annualized_return_pct) = if total_invested > 0.0 {
            let growth = final_balance / total_invested;
            (
                (growth - 1.0) * 100.0,
                (growth.powf(12.0 / f64::from(horizon)) - 1.0) * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        tracing::debug!(
            scenario = %scenario.id,
            horizon,
            final_balance,
            "path simulated"
        );

        Ok(SimulationPath {
            evolution,
            final_balance,
            total_invested,
            total_interest: final_balance - total_invested,
            total_return_pct,
            annualized_return_pct,
        })
    }

    /// Run the simulation from an optional base input.
    ///
    /// # Errors
    /// `MissingBaseSimulation` when `base` is `None`, otherwise as [`run`](Self::run).
    pub fn run_optional<R>(
        &self,
        scenario: &Scenario,
        base: Option<&BaseSimulationInput>,
        rng: &mut R,
    ) -> EconResult<SimulationPath>
    where
        R: UniformSource + ?Sized,
    {
        let base = base.ok_or(EconError::MissingBaseSimulation)?;
        self.run(scenario, base, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use econ_core::rng::{ScenarioRng, SequenceRng};
    use econ_core::types::{
        EconomicEvent, EventImpact, EventKind, ScenarioKind, ScenarioParameters, Trajectory,
        VolatilityIndicators,
    };

    fn flat_scenario(rate: f64) -> Scenario {
        let params = ScenarioParameters::new(Trajectory::constant(0.0), Trajectory::constant(rate))
            .with_volatility(VolatilityIndicators::new(0.0, 0.0, 0.0));
        Scenario::new("flat", "Flat", ScenarioKind::Custom, params)
    }

    #[test]
    fn test_zero_rate_accumulates_contributions() {
        let sim = PathSimulator::new();
        let base = BaseSimulationInput::new(1_000.0, 100.0, 6);
        let path = sim
            .run(&flat_scenario(0.0), &base, &mut SequenceRng::midpoint())
            .unwrap();

        assert_eq!(path.evolution.len(), 6);
        assert_eq!(path.total_invested, 1_500.0);
        assert_eq!(path.final_balance, 1_500.0);
        assert_eq!(path.total_interest, 0.0);
        assert_eq!(path.evolution[0].contribution, 1_000.0);
        assert_eq!(path.evolution[5].contribution, 100.0);
    }

    #[test]
    fn test_deterministic_compounding_without_volatility() {
        let sim = PathSimulator::new();
        let base = BaseSimulationInput::new(1_000.0, 0.0, 12);
        let mut rng = ScenarioRng::from_seed(5);
        let path = sim.run(&flat_scenario(12.0), &base, &mut rng).unwrap();

        // zero market volatility removes the stochastic term entirely
        assert_relative_eq!(path.final_balance, 1_000.0 * 1.01_f64.powi(12), epsilon = 1e-9);
        assert_relative_eq!(path.annualized_return_pct, (1.01_f64.powi(12) - 1.0) * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_seasonal_volatility_profile() {
        let sim = PathSimulator::new();
        assert_relative_eq!(sim.seasonal_volatility(20.0, 3), 26.0, epsilon = 1e-12);
        assert_relative_eq!(sim.seasonal_volatility(20.0, 9), 14.0, epsilon = 1e-12);
        assert_relative_eq!(sim.seasonal_volatility(20.0, 12), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_event_deltas_reach_records() {
        let event = EconomicEvent::new("e", "Spike", EventKind::Crisis, 2, 3).with_impact(EventImpact {
            inflation: 5.0,
            interest_rate: 2.0,
            market: 10.0,
            duration_months: 2,
        });
        let mut scenario = flat_scenario(10.0);
        scenario.parameters.events.push(event);

        let base = BaseSimulationInput::new(1_000.0, 0.0, 4);
        let path = PathSimulator::new()
            .run(&scenario, &base, &mut SequenceRng::midpoint())
            .unwrap();

        assert_eq!(path.evolution[0].inflation, 0.0);
        assert_eq!(path.evolution[1].inflation, 5.0);
        assert_eq!(path.evolution[2].interest_rate, 12.0);
        assert_eq!(path.evolution[3].interest_rate, 10.0);
        // market delta ignored by default
        assert!(path.evolution.iter().all(|r| r.volatility == 0.0));

        let config = SimulatorConfig::builder().market_overlay(true).build().unwrap();
        let path = PathSimulator::with_config(config)
            .unwrap()
            .run(&scenario, &base, &mut SequenceRng::midpoint())
            .unwrap();
        assert!(path.evolution[1].volatility > 0.0);
        assert_eq!(path.evolution[3].volatility, 0.0);
    }

    #[test]
    fn test_draw_order_per_month() {
        let params = ScenarioParameters::new(Trajectory::volatile(4.0, 6.0), Trajectory::volatile(10.0, 12.0));
        let scenario = Scenario::new("v", "Volatile", ScenarioKind::Pessimistic, params);
        let base = BaseSimulationInput::new(1_000.0, 10.0, 5);
        let mut rng = SequenceRng::midpoint();
        PathSimulator::new().run(&scenario, &base, &mut rng).unwrap();
        assert_eq!(rng.draws(), 15);
    }

    #[test]
    fn test_zero_initial_value() {
        let base = BaseSimulationInput::new(0.0, 100.0, 3);
        let path = PathSimulator::new()
            .run(&flat_scenario(6.0), &base, &mut SequenceRng::midpoint())
            .unwrap();
        assert_eq!(path.evolution[0].balance, 0.0);
        assert!(path.evolution.iter().all(|r| r.purchasing_power == 0.0));
        assert_eq!(path.total_invested, 200.0);
    }

    #[test]
    fn test_errors() {
        let sim = PathSimulator::new();
        let mut rng = SequenceRng::midpoint();
        assert_eq!(
            sim.run(&flat_scenario(1.0), &BaseSimulationInput::new(1.0, 1.0, 0), &mut rng),
            Err(EconError::InvalidHorizon(0))
        );
        assert_eq!(
            sim.run_optional(&flat_scenario(1.0), None, &mut rng),
            Err(EconError::MissingBaseSimulation)
        );

        let params = ScenarioParameters::new(Trajectory::exponential(0.0, 3.0), Trajectory::constant(1.0));
        let degenerate = Scenario::new("d", "Degenerate", ScenarioKind::Custom, params);
        assert_eq!(
            sim.run(&degenerate, &BaseSimulationInput::new(1.0, 1.0, 3), &mut rng),
            Err(EconError::DegenerateTrajectory)
        );
    }

    #[test]
    fn test_custom_config() {
        let config = SimulatorConfig::builder().seasonal_amplitude(0.0).build().unwrap();
        let sim = PathSimulator::with_config(config).unwrap();
        assert_eq!(sim.seasonal_volatility(15.0, 3), 15.0);
    }
}
