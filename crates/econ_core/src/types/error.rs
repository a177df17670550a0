//! Error types for structured error handling.
//!
//! Every public entry point of the engine validates its preconditions and
//! fails fast with an [`EconError`]. Numerical edge cases (empty downside
//! set, zero variance) are not errors; they degrade to documented fallback
//! values inside the analysers.

use thiserror::Error;

/// Categorised engine errors.
///
/// # Variants
/// - `InvalidHorizon`: simulation horizon shorter than one month
/// - `DegenerateTrajectory`: exponential trajectory starting at zero
/// - `InsufficientScenarios`: comparison over fewer than two results
/// - `MissingBaseSimulation`: simulation requested without a base input
/// - `InvalidInput`: any other rejected parameter
///
/// # Examples
/// ```
/// use econ_core::types::EconError;
///
/// let err = EconError::InvalidHorizon(0);
/// assert_eq!(format!("{}", err), "Invalid horizon: 0 months (must be at least 1)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconError {
    /// Horizon shorter than one month.
    #[error("Invalid horizon: {0} months (must be at least 1)")]
    InvalidHorizon(u32),

    /// Exponential trajectory with a zero initial value.
    #[error("Degenerate trajectory: exponential model requires a non-zero initial value")]
    DegenerateTrajectory,

    /// Comparison requested with fewer than two results.
    #[error("Insufficient scenarios: got {got}, need at least 2")]
    InsufficientScenarios {
        /// Number of results supplied
        got: usize,
    },

    /// Simulation invoked without a base input.
    #[error("Missing base simulation input")]
    MissingBaseSimulation,

    /// Invalid parameter value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EconError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the engine crates.
pub type EconResult<T> = Result<T, EconError>;
