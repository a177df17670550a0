//! Error types for the econsim CLI.

use crate::config::ConfigError;
use econ_core::types::EconError;
use econ_risk::catalog::CatalogError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog operation failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Simulation or analysis failed
    #[error("Engine error: {0}")]
    Engine(#[from] EconError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("bad shock");
        assert_eq!(err.to_string(), "Invalid argument: bad shock");
    }

    #[test]
    fn test_from_catalog_error() {
        let err: CliError = CatalogError::ScenarioNotFound("x".to_string()).into();
        assert_eq!(err.to_string(), "Catalog error: Scenario not found: x");
    }
}
