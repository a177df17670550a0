//! Shock and recovery definitions.

use econ_core::types::{EconError, EconResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted drawdown phase (100 years).
pub const MAX_SHOCK_DURATION_MONTHS: u32 = 1_200;

/// Category of a stress shock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShockKind {
    /// Broad equity and asset price collapse
    MarketCrash,
    /// Sudden jump in consumer prices
    InflationSpike,
    /// Abrupt increase of policy rates
    RateShock,
    /// Sharp devaluation of the home currency
    CurrencyCrisis,
    /// Health crisis with economic shutdown
    Pandemic,
    /// User-defined shock
    Custom,
}

impl ShockKind {
    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MarketCrash => "Market crash",
            Self::InflationSpike => "Inflation spike",
            Self::RateShock => "Rate shock",
            Self::CurrencyCrisis => "Currency crisis",
            Self::Pandemic => "Pandemic",
            Self::Custom => "Custom shock",
        }
    }
}

impl fmt::Display for ShockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Time profile of the drawdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShockShape {
    /// Full loss in the first month
    #[default]
    Sudden,
    /// Linear decline over the whole duration
    Gradual,
    /// Decline over the first half, trough held for the rest
    Prolonged,
}

/// A single stress shock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shock {
    /// Shock category
    pub kind: ShockKind,
    /// Severity (% decline of the affected asset)
    pub magnitude_pct: f64,
    /// Length of the drawdown phase
    pub duration_months: u32,
    /// Drawdown profile
    #[serde(default)]
    pub shape: ShockShape,
}

impl Shock {
    /// Create a sudden shock.
    pub fn new(kind: ShockKind, magnitude_pct: f64, duration_months: u32) -> Self {
        Self {
            kind,
            magnitude_pct,
            duration_months,
            shape: ShockShape::Sudden,
        }
    }

    /// Set the drawdown profile.
    pub fn with_shape(mut self, shape: ShockShape) -> Self {
        self.shape = shape;
        self
    }

    /// Validate the shock.
    ///
    /// # Errors
    /// `InvalidInput` for a negative or non-finite magnitude, or a duration
    /// above [`MAX_SHOCK_DURATION_MONTHS`].
    pub fn validate(&self) -> EconResult<()> {
        if !self.magnitude_pct.is_finite() || self.magnitude_pct < 0.0 {
            return Err(EconError::invalid_input(format!(
                "{} magnitude must be a non-negative percentage, got {}",
                self.kind, self.magnitude_pct
            )));
        }
        if self.duration_months > MAX_SHOCK_DURATION_MONTHS {
            return Err(EconError::invalid_input(format!(
                "{} duration must be at most {} months, got {}",
                self.kind, MAX_SHOCK_DURATION_MONTHS, self.duration_months
            )));
        }
        Ok(())
    }
}

/// Shape of the recovery after the trough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecoveryPattern {
    /// Linear rebound to the pre-shock level
    #[default]
    V,
    /// Flat bottom for a third of the window, then linear rebound
    U,
    /// Partial rebound to a lower plateau
    L,
    /// Rebound, second dip, then full recovery
    W,
}

/// Default share of the loss regained by an L-shaped recovery (%).
pub const DEFAULT_RECOVERY_FLOOR_PCT: f64 = 50.0;

/// Recovery assumptions applied to the dominant shock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecoverySpec {
    /// Recovery shape
    pub pattern: RecoveryPattern,
    /// Share of the loss regained by an L-shaped recovery (%)
    pub floor_pct: f64,
}

impl Default for RecoverySpec {
    fn default() -> Self {
        Self {
            pattern: RecoveryPattern::V,
            floor_pct: DEFAULT_RECOVERY_FLOOR_PCT,
        }
    }
}

impl RecoverySpec {
    /// Create a recovery with the default floor.
    pub fn new(pattern: RecoveryPattern) -> Self {
        Self {
            pattern,
            ..Self::default()
        }
    }

    /// Set the L-shape floor.
    pub fn with_floor_pct(mut self, floor_pct: f64) -> Self {
        self.floor_pct = floor_pct;
        self
    }

    /// Validate the recovery assumptions.
    pub fn validate(&self) -> EconResult<()> {
        if !(0.0..=100.0).contains(&self.floor_pct) {
            return Err(EconError::invalid_input(format!(
                "recovery floor must be in [0, 100], got {}",
                self.floor_pct
            )));
        }
        Ok(())
    }

    /// Fraction of the loss regained at `x` in [0, 1] of the recovery window.
    pub fn regained_fraction(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        match self.pattern {
            RecoveryPattern::V => x,
            RecoveryPattern::U => {
                if x <= 1.0 / 3.0 {
                    0.0
                } else {
                    (x - 1.0 / 3.0) * 1.5
                }
            }
            RecoveryPattern::L => x * self.floor_pct / 100.0,
            RecoveryPattern::W => {
                if x <= 0.5 {
                    1.2 * x
                } else if x <= 0.75 {
                    0.6 - 1.2 * (x - 0.5)
                } else {
                    0.3 + 2.8 * (x - 0.75)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_negative_magnitude_rejected() {
        assert!(Shock::new(ShockKind::MarketCrash, -1.0, 3).validate().is_err());
        assert!(Shock::new(ShockKind::MarketCrash, 0.0, 3).validate().is_ok());
    }

    #[test]
    fn test_duration_capped() {
        let at_cap = Shock::new(ShockKind::Custom, 10.0, MAX_SHOCK_DURATION_MONTHS);
        assert!(at_cap.validate().is_ok());
        assert!(matches!(
            Shock::new(ShockKind::Custom, 10.0, MAX_SHOCK_DURATION_MONTHS + 1).validate(),
            Err(EconError::InvalidInput(_))
        ));
        assert!(Shock::new(ShockKind::Custom, 10.0, u32::MAX).validate().is_err());
    }

    #[test]
    fn test_recovery_endpoints() {
        for pattern in [RecoveryPattern::V, RecoveryPattern::U, RecoveryPattern::W] {
            let spec = RecoverySpec::new(pattern);
            assert_relative_eq!(spec.regained_fraction(0.0), 0.0);
            assert_relative_eq!(spec.regained_fraction(1.0), 1.0, epsilon = 1e-12);
        }
        let l = RecoverySpec::new(RecoveryPattern::L).with_floor_pct(40.0);
        assert_relative_eq!(l.regained_fraction(1.0), 0.4);
    }

    #[test]
    fn test_w_shape_second_dip() {
        let w = RecoverySpec::new(RecoveryPattern::W);
        assert_relative_eq!(w.regained_fraction(0.5), 0.6, epsilon = 1e-12);
        assert_relative_eq!(w.regained_fraction(0.75), 0.3, epsilon = 1e-12);
        assert!(w.regained_fraction(0.6) < w.regained_fraction(0.5));
    }

    #[test]
    fn test_u_shape_flat_bottom() {
        let u = RecoverySpec::new(RecoveryPattern::U);
        assert_eq!(u.regained_fraction(0.2), 0.0);
        assert!(u.regained_fraction(0.5) > 0.0);
    }

    #[test]
    fn test_floor_validation() {
        assert!(RecoverySpec::default().validate().is_ok());
        assert!(RecoverySpec::default().with_floor_pct(120.0).validate().is_err());
    }
}
