//! Stress testing of a base contribution plan.
//!
//! This module provides:
//! - [`Shock`] and [`RecoverySpec`]: shock severity, duration, drawdown and recovery shape
//! - [`StressTestEngine`]: per-shock impacts, dominant-shock summary, recovery path
//! - [`StressPreset`]: ready-made shock bundles
//!
//! Per shock: `loss = initial * magnitude / 100 * 0.5`,
//! `recovery = duration * 2`, `survival = 1 - min(magnitude * 0.3, 90) / 100`.

mod engine;
mod presets;
mod shock;

pub use engine::{
    ShockImpact, StressTestEngine, StressTestResult, CRITICAL_MAGNITUDE_PCT, LOSS_SHARE,
    MAX_SURVIVAL_HIT_PCT, RECOVERY_MULTIPLIER, SURVIVAL_SENSITIVITY,
};
pub use presets::StressPreset;
pub use shock::{
    RecoveryPattern, RecoverySpec, Shock, ShockKind, ShockShape, DEFAULT_RECOVERY_FLOOR_PCT,
    MAX_SHOCK_DURATION_MONTHS,
};
