//! Catalog error types.

use econ_core::types::EconError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// Scenario id not present in the catalog.
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    /// Scenario id already present in the catalog.
    #[error("Duplicate scenario ID: {0}")]
    DuplicateScenario(String),

    /// Operation needs at least one active scenario.
    #[error("No active scenarios in catalog")]
    NoActiveScenarios,

    /// Failure reported by the simulation or analysis engine.
    #[error(transparent)]
    Engine(#[from] EconError),
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CatalogError::ScenarioNotFound("s1".to_string()).to_string(),
            "Scenario not found: s1"
        );
        assert_eq!(
            CatalogError::DuplicateScenario("s1".to_string()).to_string(),
            "Duplicate scenario ID: s1"
        );
    }

    #[test]
    fn test_from_engine_error() {
        let err: CatalogError = EconError::InvalidHorizon(0).into();
        assert_eq!(err.to_string(), "Invalid horizon: 0 months (must be at least 1)");
        assert!(matches!(err, CatalogError::Engine(EconError::InvalidHorizon(0))));
    }
}
