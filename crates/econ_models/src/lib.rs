//! # Econ Models (L2: Models)
//!
//! Deterministic and stochastic building blocks of a scenario run.
//!
//! This crate provides:
//! - [`trajectory::ParameterProjector`]: macro variable value at a given month
//! - [`events::EventOverlay`]: summed deltas of the events in force
//! - [`simulator::PathSimulator`]: month-by-month balance simulation
//! - [`presets`]: optimistic / realistic / pessimistic scenarios and events
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            econ_models (L2)             │
//! ├─────────────────────────────────────────┤
//! │  trajectory/ - ParameterProjector       │
//! │  events/     - EventOverlay             │
//! │  simulator/  - PathSimulator, config    │
//! │  presets/    - preset scenarios/events  │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             econ_core (L1)              │
//! │  types, rng, statistics                 │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use econ_core::rng::ScenarioRng;
//! use econ_core::types::BaseSimulationInput;
//! use econ_models::presets::PresetScenarioType;
//! use econ_models::simulator::PathSimulator;
//!
//! let scenario = PresetScenarioType::Realistic.generate();
//! let base = BaseSimulationInput::new(10_000.0, 500.0, 12);
//! let mut rng = ScenarioRng::from_seed(42);
//!
//! let path = PathSimulator::new().run(&scenario, &base, &mut rng).unwrap();
//! assert_eq!(path.evolution.len(), 12);
//! assert_eq!(path.total_invested, 15_500.0);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod events;
pub mod presets;
pub mod simulator;
pub mod trajectory;

pub use events::{DeltaBounds, EventDeltas, EventOverlay};
pub use presets::{PresetEvent, PresetScenarioType};
pub use simulator::{PathSimulator, SimulationPath, SimulatorConfig};
pub use trajectory::ParameterProjector;
