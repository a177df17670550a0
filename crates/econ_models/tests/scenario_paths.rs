//! Path simulation properties over the preset scenarios.

use approx::assert_relative_eq;
use econ_core::rng::{ScenarioRng, SequenceRng};
use econ_core::types::{BaseSimulationInput, Trajectory};
use econ_models::events::{DeltaBounds, EventOverlay};
use econ_models::presets::PresetScenarioType;
use econ_models::simulator::{PathSimulator, SimulatorConfig};
use econ_models::trajectory::ParameterProjector;
use proptest::prelude::*;

#[test]
fn test_constant_trajectory_every_month() {
    let projector = ParameterProjector::new();
    let mut rng = SequenceRng::midpoint();
    for month in 1..=24 {
        let v = projector
            .value(&Trajectory::constant(3.25), month, 24, &mut rng)
            .unwrap();
        assert_eq!(v, 3.25);
    }
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_pessimistic_event_windows_in_records() {
    let scenario = PresetScenarioType::Pessimistic.generate();
    let base = BaseSimulationInput::new(10_000.0, 0.0, 24);
    let path = PathSimulator::new()
        .run(&scenario, &base, &mut SequenceRng::midpoint())
        .unwrap();

    // crisis adds +2.5 inflation on months 3..=12, recession -1.0 on 13..=24
    let projector = ParameterProjector::new();
    let mut rng = SequenceRng::midpoint();
    let base_inflation = |m: u32, rng: &mut SequenceRng| {
        projector
            .value(&scenario.parameters.inflation, m, 24, rng)
            .unwrap()
    };
    assert_relative_eq!(path.evolution[1].inflation, base_inflation(2, &mut rng), epsilon = 1e-12);
    assert_relative_eq!(path.evolution[2].inflation, base_inflation(3, &mut rng) + 2.5, epsilon = 1e-12);
    assert_relative_eq!(path.evolution[12].inflation, base_inflation(13, &mut rng) - 1.0, epsilon = 1e-12);
}

#[test]
fn test_bounded_overlay_clamps_market_delta() {
    let scenario = PresetScenarioType::Pessimistic.generate();
    let base = BaseSimulationInput::new(1_000.0, 0.0, 12);
    let bounds = DeltaBounds {
        inflation: 1.0,
        interest_rate: 1.0,
        market: 5.0,
    };
    let config = SimulatorConfig::builder().market_overlay(true).build().unwrap();
    let unbounded = PathSimulator::with_config(config).unwrap();
    let bounded = unbounded.with_overlay(EventOverlay::with_bounds(bounds).unwrap());

    let a = bounded.run(&scenario, &base, &mut SequenceRng::midpoint()).unwrap();
    let b = unbounded.run(&scenario, &base, &mut SequenceRng::midpoint()).unwrap();
    // month 12: seasonal factor 1, crisis market delta 20 clamped to 5
    assert_relative_eq!(a.evolution[11].volatility, 35.0, epsilon = 1e-9);
    assert_relative_eq!(b.evolution[11].volatility, 50.0, epsilon = 1e-9);
}

#[test]
fn test_default_volatility_ignores_market_delta() {
    let scenario = PresetScenarioType::Pessimistic.generate();
    let base = BaseSimulationInput::new(1_000.0, 0.0, 12);
    let path = PathSimulator::new()
        .run(&scenario, &base, &mut SequenceRng::midpoint())
        .unwrap();

    // crisis window 3..=12 is active, volatility stays on the preset's 30
    assert_relative_eq!(path.evolution[11].volatility, 30.0, epsilon = 1e-9);
    assert_relative_eq!(path.evolution[2].volatility, 30.0 * 1.3, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn prop_linear_hits_final(initial in -50.0_f64..50.0, final_value in -50.0_f64..50.0, horizon in 1_u32..600) {
        let v = ParameterProjector::new()
            .value(&Trajectory::linear(initial, final_value), horizon, horizon, &mut SequenceRng::midpoint())
            .unwrap();
        prop_assert!((v - final_value).abs() <= 1e-9);
    }

    #[test]
    fn prop_volatile_within_band(initial in 0.0_f64..20.0, final_value in 0.0_f64..20.0,
                                 month in 1_u32..60, seed in any::<u64>()) {
        let t = Trajectory::volatile(initial, final_value);
        let mut rng = ScenarioRng::from_seed(seed);
        let v = ParameterProjector::new().value(&t, month, 60, &mut rng).unwrap();
        let base = initial + (final_value - initial) * f64::from(month) / 60.0;
        prop_assert!((v - base).abs() <= 0.2 * (final_value - initial).abs() + 1e-9);
    }

    #[test]
    fn prop_evolution_length(horizon in 1_u32..240, seed in any::<u64>()) {
        let base = BaseSimulationInput::new(5_000.0, 250.0, horizon);
        for preset in PresetScenarioType::all() {
            let path = PathSimulator::new()
                .run(&preset.generate(), &base, &mut ScenarioRng::from_seed(seed))
                .unwrap();
            prop_assert_eq!(path.evolution.len(), horizon as usize);
            prop_assert_eq!(path.total_invested, 5_000.0 + 250.0 * f64::from(horizon - 1));
        }
    }
}
