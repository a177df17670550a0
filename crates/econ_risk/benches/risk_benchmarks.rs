//! Criterion benchmarks for econ_risk simulation and analysis.
//!
//! Measures a single scenario simulation, metric computation and seeded
//! path batches across horizons to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use econ_core::rng::ScenarioRng;
use econ_core::types::BaseSimulationInput;
use econ_models::presets::PresetScenarioType;
use econ_risk::analyzer::RiskAnalyzer;
use econ_risk::parallel::ParallelConfig;
use econ_risk::simulation::ScenarioSimulator;

/// Benchmark one full simulation (path plus analytics).
fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let scenario = PresetScenarioType::Pessimistic.generate();
    let sim = ScenarioSimulator::new();

    for horizon in [12_u32, 120, 600] {
        let base = BaseSimulationInput::new(10_000.0, 500.0, horizon);
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &base, |b, base| {
            b.iter(|| {
                let mut rng = ScenarioRng::from_seed(42);
                sim.simulate(black_box(&scenario), Some(base), &mut rng).unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark metric computation on a precomputed evolution.
fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let scenario = PresetScenarioType::Realistic.generate();
    let sim = ScenarioSimulator::new();
    let analyzer = RiskAnalyzer::new();

    for horizon in [12_u32, 120, 600] {
        let base = BaseSimulationInput::new(10_000.0, 500.0, horizon);
        let result = sim.simulate_seeded(&scenario, &base, 7).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon),
            &result.evolution,
            |b, evolution| {
                b.iter(|| analyzer.metrics(black_box(evolution)));
            },
        );
    }

    group.finish();
}

/// Benchmark seeded path batches, sequential against parallel.
fn bench_path_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_batches");
    group.sample_size(20);
    let scenario = PresetScenarioType::Pessimistic.generate();
    let base = BaseSimulationInput::new(10_000.0, 500.0, 120);

    for n_paths in [100_usize, 1_000] {
        let sequential = ScenarioSimulator::new().with_parallel(ParallelConfig::sequential());
        group.bench_with_input(BenchmarkId::new("sequential", n_paths), &n_paths, |b, &n| {
            b.iter(|| sequential.simulate_paths(&scenario, &base, n, 1).unwrap());
        });

        let parallel = ScenarioSimulator::new();
        group.bench_with_input(BenchmarkId::new("parallel", n_paths), &n_paths, |b, &n| {
            b.iter(|| parallel.simulate_paths(&scenario, &base, n, 1).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulate, bench_metrics, bench_path_batches);
criterion_main!(benches);
