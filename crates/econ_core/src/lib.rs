//! # econ_core: Foundation for Economic Scenario Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! econ_core is the bottom layer of the workspace and provides:
//! - Scenario definitions: `Scenario`, `Trajectory`, `EconomicEvent` (`types`)
//! - Simulation records: `BaseSimulationInput`, `MonthlyRecord`, `ScenarioResult` (`types::simulation`)
//! - Risk records: `RiskMetrics`, `RiskAssessment` (`types::risk`)
//! - Error types: `EconError` (`types::error`)
//! - Explicit random sources: `UniformSource`, `ScenarioRng`, `SequenceRng` (`rng`)
//! - Statistics helpers (`math::stats`)
//!
//! ## No I/O
//!
//! Nothing in this crate touches files, sockets or global state. All records
//! are plain serialisable data; persistence belongs to the caller.
//!
//! ## Usage Examples
//!
//! ```rust
//! use econ_core::types::{BaseSimulationInput, Scenario, ScenarioKind, ScenarioParameters, Trajectory};
//!
//! let params = ScenarioParameters::new(Trajectory::linear(4.0, 4.5), Trajectory::linear(11.0, 11.5));
//! let scenario = Scenario::new("realistic", "Realistic", ScenarioKind::Realistic, params);
//! let input = BaseSimulationInput::new(10_000.0, 500.0, 12);
//!
//! assert!(input.validate().is_ok());
//! assert_eq!(scenario.kind.as_str(), "realistic");
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod types;
