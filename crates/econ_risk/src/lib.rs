//! # Econ Risk (L3: Application)
//!
//! Risk analytics, stress testing, comparison and orchestration of
//! economic scenario simulations.
//!
//! This crate provides:
//! - Statistical risk metrics (VaR, CVaR, Sharpe, Sortino, drawdown)
//! - Rule-based risk assessment with mitigation catalog
//! - Scenario simulation with attached analytics and seeded path batches
//! - Shock-based stress testing with recovery projection
//! - Scenario comparison with correlation matrix and recommendation
//! - Scenario catalog with active set and threshold alerts
//! - Rayon-based parallelisation of batch runs
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             econ_risk (L3)              │
//! ├─────────────────────────────────────────┤
//! │  analyzer/   - RiskAnalyzer, rules      │
//! │  simulation  - ScenarioSimulator        │
//! │  stress/     - StressTestEngine         │
//! │  comparison/ - ComparisonEngine         │
//! │  catalog/    - ScenarioCatalog, alerts  │
//! │  parallel/   - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            econ_models (L2)             │
//! │  projector, event overlay, simulator    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use econ_core::types::BaseSimulationInput;
//! use econ_risk::catalog::ScenarioCatalog;
//!
//! let catalog = ScenarioCatalog::with_presets();
//! let base = BaseSimulationInput::new(10_000.0, 500.0, 24);
//!
//! let (results, comparison) = catalog.compare_active(&base, 42).unwrap();
//! assert_eq!(results.len(), 3);
//! assert_eq!(comparison.most_likely_scenario_id, "realistic");
//!
//! for result in &results {
//!     let _alerts = catalog.evaluate_alerts(result);
//! }
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analyzer;
pub mod catalog;
pub mod comparison;
pub mod parallel;
pub mod simulation;
pub mod stress;

pub use analyzer::{AnalyzerConfig, RiskAnalyzer};
pub use catalog::{AlertThresholds, CatalogError, RiskAlert, ScenarioCatalog};
pub use comparison::{ComparisonEngine, ComparisonResult, CorrelationMethod};
pub use parallel::ParallelConfig;
pub use simulation::{PathDistribution, ScenarioSimulator};
pub use stress::{RecoverySpec, Shock, StressPreset, StressTestEngine, StressTestResult};
