//! Stress test execution.

use super::shock::{RecoverySpec, Shock, ShockKind, ShockShape};
use econ_core::types::{BaseSimulationInput, EconError, EconResult};
use serde::{Deserialize, Serialize};

/// Share of the shock magnitude that hits the portfolio.
pub const LOSS_SHARE: f64 = 0.5;

/// Recovery length as a multiple of the shock duration.
pub const RECOVERY_MULTIPLIER: u32 = 2;

/// Survival sensitivity per point of magnitude.
pub const SURVIVAL_SENSITIVITY: f64 = 0.3;

/// Cap on the survival hit of a single shock (%).
pub const MAX_SURVIVAL_HIT_PCT: f64 = 90.0;

/// Magnitude above which a shock is critical (%).
pub const CRITICAL_MAGNITUDE_PCT: f64 = 50.0;

/// Impact of a single shock on the base portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShockImpact {
    /// Shock that produced the impact
    pub shock: Shock,
    /// Loss in currency units
    pub loss: f64,
    /// Months needed to recover
    pub recovery_months: u32,
    /// Probability of surviving this shock alone (fraction)
    pub survival_factor: f64,
    /// Magnitude above the critical threshold
    pub critical: bool,
}

/// Outcome of a stress test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StressTestResult {
    /// Per-shock impacts, in input order
    pub shock_impacts: Vec<ShockImpact>,
    /// Kind of the shock with the largest loss
    pub dominant_shock: ShockKind,
    /// Loss of the dominant shock
    pub max_loss: f64,
    /// Recovery months of the dominant shock
    pub recovery_months: u32,
    /// Product of the per-shock survival factors (fraction)
    pub survival_probability: f64,
    /// `max_loss / initial_value * 100`
    pub impact_on_wealth_pct: f64,
    /// Kinds of the shocks with magnitude above 50 %
    pub critical_shocks: Vec<ShockKind>,
    /// Balance per month from the shock start to the end of recovery,
    /// beginning with the pre-shock value
    pub recovery_path: Vec<f64>,
    /// Generic guidance
    pub recommendations: Vec<String>,
}

/// Applies shocks to a base simulation input.
///
/// Only the dominant shock drives the reported loss and recovery; the
/// survival probability compounds over all shocks.
///
/// # Examples
///
/// ```rust
/// use econ_core::types::BaseSimulationInput;
/// use econ_risk::stress::{RecoverySpec, Shock, ShockKind, StressTestEngine};
///
/// let base = BaseSimulationInput::new(10_000.0, 500.0, 24);
/// let shocks = [Shock::new(ShockKind::MarketCrash, 30.0, 6)];
/// let result = StressTestEngine::new()
///     .run(&base, &shocks, &RecoverySpec::default())
///     .unwrap();
///
/// assert_eq!(result.max_loss, 1_500.0);
/// assert_eq!(result.recovery_months, 12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StressTestEngine;

impl StressTestEngine {
    /// Create a stress engine.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a single shock.
    pub fn impact(&self, base: &BaseSimulationInput, shock: &Shock) -> ShockImpact {
        let hit = (shock.magnitude_pct * SURVIVAL_SENSITIVITY).min(MAX_SURVIVAL_HIT_PCT);
        ShockImpact {
            shock: *shock,
            loss: base.initial_value * shock.magnitude_pct / 100.0 * LOSS_SHARE,
            recovery_months: shock.duration_months.saturating_mul(RECOVERY_MULTIPLIER),
            survival_factor: 1.0 - hit / 100.0,
            critical: shock.magnitude_pct > CRITICAL_MAGNITUDE_PCT,
        }
    }

    /// Run the stress test.
    ///
    /// # Errors
    /// `InvalidInput` for an empty shock list, an invalid shock (see
    /// [`Shock::validate`]) or an invalid recovery specification.
    pub fn run(
        &self,
        base: &BaseSimulationInput,
        shocks: &[Shock],
        recovery: &RecoverySpec,
    ) -> EconResult<StressTestResult> {
        if shocks.is_empty() {
            return Err(EconError::invalid_input("stress test needs at least one shock"));
        }
        for shock in shocks {
            shock.validate()?;
        }
        recovery.validate()?;

        let shock_impacts: Vec<ShockImpact> =
            shocks.iter().map(|s| self.impact(base, s)).collect();

        // first shock wins ties
        let mut dominant = &shock_impacts[0];
        for impact in &shock_impacts[1..] {
            if impact.loss > dominant.loss {
                dominant = impact;
            }
        }

        let survival_probability = shock_impacts
            .iter()
            .map(|i| i.survival_factor)
            .product::<f64>();
        let impact_on_wealth_pct = if base.initial_value > 0.0 {
            dominant.loss / base.initial_value * 100.0
        } else {
            0.0
        };
        let critical_shocks = shock_impacts
            .iter()
            .filter(|i| i.critical)
            .map(|i| i.shock.kind)
            .collect();
        let recovery_path = recovery_path(base.initial_value, dominant, recovery);

        tracing::info!(
            shocks = shocks.len(),
            dominant = %dominant.shock.kind,
            max_loss = dominant.loss,
            survival_probability,
            "stress test evaluated"
        );

        Ok(StressTestResult {
            dominant_shock: dominant.shock.kind,
            max_loss: dominant.loss,
            recovery_months: dominant.recovery_months,
            survival_probability,
            impact_on_wealth_pct,
            critical_shocks,
            recovery_path,
            recommendations: recommendations(),
            shock_impacts,
        })
    }
}

/// Project the balance through the drawdown and recovery phases.
fn recovery_path(initial: f64, impact: &ShockImpact, recovery: &RecoverySpec) -> Vec<f64> {
    let loss = impact.loss;
    let trough = initial - loss;
    let duration = impact.shock.duration_months;
    let mut path = Vec::with_capacity(1 + duration as usize + impact.recovery_months as usize);
    path.push(initial);

    let decline_months = match impact.shock.shape {
        ShockShape::Sudden => 1,
        ShockShape::Gradual => duration,
        ShockShape::Prolonged => duration.div_ceil(2),
    }
    .max(1);
    for month in 1..=duration {
        let progress = (f64::from(month) / f64::from(decline_months)).min(1.0);
        path.push(initial - loss * progress);
    }

    let window = impact.recovery_months;
    for month in 1..=window {
        let x = f64::from(month) / f64::from(window);
        path.push(trough + loss * recovery.regained_fraction(x));
    }
    path
}

fn recommendations() -> Vec<String> {
    [
        "Keep an emergency fund covering at least six months of expenses",
        "Diversify across asset classes and currencies",
        "Avoid selling at the trough; keep contributing during the recovery",
        "Review the allocation once the shock window has passed",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
