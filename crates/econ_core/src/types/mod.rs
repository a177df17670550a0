//! Core types: scenarios, events, simulation records, risk records, errors.

pub mod error;
pub mod event;
pub mod risk;
pub mod scenario;
pub mod simulation;

pub use error::{EconError, EconResult};
pub use event::{EconomicEvent, EventImpact, EventKind};
pub use risk::{RiskAssessment, RiskFactor, RiskLevel, RiskMetrics};
pub use scenario::{
    GrowthIndicators, Scenario, ScenarioKind, ScenarioParameters, Trajectory, VariationModel,
    VolatilityIndicators,
};
pub use simulation::{BaseSimulationInput, MonthlyRecord, ScenarioResult};
