//! Parameter projection along a trajectory.
//!
//! Computes the value of a macro variable at a given month from its
//! [`Trajectory`] definition, with `progress = month / total_months`:
//!
//! ```text
//! Constant     v = initial
//! Linear       v = initial + (final - initial) * progress
//! Exponential  v = initial * (final / initial) ^ progress
//! Volatile     v = linear + (u - 0.5) * 2 * 0.2 * |final - initial|
//! ```
//!
//! The volatile model is intentionally nondeterministic: it does not hit
//! `final` exactly at `progress = 1`. It consumes exactly one draw from the
//! supplied uniform source per call; the other models consume none.
//! Negative values are never clamped.

use econ_core::rng::UniformSource;
use econ_core::types::{EconError, EconResult, Trajectory, VariationModel};

/// Default half-width of the volatile noise band, as a fraction of the span.
pub const DEFAULT_NOISE_RATIO: f64 = 0.2;

/// Projects trajectory values month by month.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterProjector {
    noise_ratio: f64,
}

impl Default for ParameterProjector {
    fn default() -> Self {
        Self {
            noise_ratio: DEFAULT_NOISE_RATIO,
        }
    }
}

impl ParameterProjector {
    /// Create a projector with the default noise band.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with a custom volatile noise band.
    ///
    /// # Errors
    /// `InvalidInput` if the ratio is negative or not finite.
    pub fn with_noise_ratio(noise_ratio: f64) -> EconResult<Self> {
        if !noise_ratio.is_finite() || noise_ratio < 0.0 {
            return Err(EconError::invalid_input(format!(
                "noise ratio must be a non-negative number, got {}",
                noise_ratio
            )));
        }
        Ok(Self { noise_ratio })
    }

    /// Returns the volatile noise band.
    #[inline]
    pub fn noise_ratio(&self) -> f64 {
        self.noise_ratio
    }

    /// Value of `trajectory` at `month` of a `total_months` horizon.
    ///
    /// # Errors
    /// - `InvalidHorizon` if `total_months == 0`
    /// - `DegenerateTrajectory` for an exponential model with `initial == 0`
    ///
    /// # Examples
    /// ```
    /// use econ_core::rng::SequenceRng;
    /// use econ_core::types::Trajectory;
    /// use econ_models::trajectory::ParameterProjector;
    ///
    /// let projector = ParameterProjector::new();
    /// let mut rng = SequenceRng::midpoint();
    /// let v = projector.value(&Trajectory::linear(4.0, 5.0), 6, 12, &mut rng).unwrap();
    /// assert!((v - 4.5).abs() < 1e-12);
    /// ```
    pub fn value<R>(
        &self,
        trajectory: &Trajectory,
        month: u32,
        total_months: u32,
        rng: &mut R,
    ) -> EconResult<f64>
    where
        R: UniformSource + ?Sized,
    {
        if total_months == 0 {
            return Err(EconError::InvalidHorizon(total_months));
        }
        let progress = f64::from(month) / f64::from(total_months);

        match trajectory.variation {
            VariationModel::Constant => Ok(trajectory.initial),
            VariationModel::Linear => Ok(linear(trajectory, progress)),
            VariationModel::Exponential => {
                if trajectory.initial == 0.0 {
                    return Err(EconError::DegenerateTrajectory);
                }
                let ratio = trajectory.final_value / trajectory.initial;
                Ok(trajectory.initial * ratio.powf(progress))
            }
            VariationModel::Volatile => {
                let band = self.noise_ratio * trajectory.span().abs();
                Ok(linear(trajectory, progress) + rng.next_symmetric() * band)
            }
        }
    }

    /// Check a trajectory for definitions that can never be projected.
    pub fn validate(&self, trajectory: &Trajectory) -> EconResult<()> {
        if !trajectory.initial.is_finite() || !trajectory.final_value.is_finite() {
            return Err(EconError::invalid_input("trajectory endpoints must be finite"));
        }
        if trajectory.variation == VariationModel::Exponential && trajectory.initial == 0.0 {
            return Err(EconError::DegenerateTrajectory);
        }
        Ok(())
    }
}

#[inline]
fn linear(trajectory: &Trajectory, progress: f64) -> f64 {
    trajectory.initial + trajectory.span() * progress
}
