//! CLI configuration management.
//!
//! Loads `econsim.toml` with per-key defaults and applies `ECONSIM_*`
//! environment overrides on top.
//!
//! ```toml
//! seed = 42
//! risk_free_rate = 0.05
//! log_level = "info"
//! output_format = "table"
//! paths = 1000
//!
//! [alerts]
//! max_risk_score = 50.0
//! max_volatility_pct = 25.0
//! max_drawdown_pct = 20.0
//! min_real_return_pct = 0.0
//! ```

use clap::ValueEnum;
use econ_risk::catalog::AlertThresholds;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Output format of command results.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// CSV rows
    Csv,
    /// Human-readable table
    #[default]
    Table,
}

impl OutputFormat {
    /// Parse a lowercase format name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Table => "table",
        };
        f.write_str(s)
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Default seed of the random generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Annual risk-free rate used by the analyser (decimal)
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Log level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Alert thresholds
    #[serde(default)]
    pub alerts: AlertThresholds,

    /// Default number of paths of the `paths` command
    #[serde(default = "default_paths")]
    pub paths: usize,

    /// Environment overrides that did not parse, reported by `validate`
    #[serde(skip)]
    pub(crate) rejected_overrides: Vec<String>,
}

fn default_seed() -> u64 {
    42
}

fn default_risk_free_rate() -> f64 {
    econ_risk::analyzer::DEFAULT_RISK_FREE_RATE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_paths() -> usize {
    1_000
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            risk_free_rate: default_risk_free_rate(),
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
            alerts: AlertThresholds::default(),
            paths: default_paths(),
            rejected_overrides: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the file if it exists, otherwise use the defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Values that do not parse leave the setting unchanged and are recorded
    /// so that [`validate`](Self::validate) reports them.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("ECONSIM_SEED") {
            match seed.parse() {
                Ok(seed) => self.seed = seed,
                Err(_) => self.reject("ECONSIM_SEED", &seed, "an unsigned integer"),
            }
        }

        if let Some(rate) = lookup("ECONSIM_RISK_FREE_RATE") {
            match rate.parse() {
                Ok(rate) => self.risk_free_rate = rate,
                Err(_) => self.reject("ECONSIM_RISK_FREE_RATE", &rate, "a decimal rate"),
            }
        }

        if let Some(level) = lookup("ECONSIM_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(format) = lookup("ECONSIM_OUTPUT_FORMAT") {
            match OutputFormat::parse(&format) {
                Some(format) => self.output_format = format,
                None => self.reject("ECONSIM_OUTPUT_FORMAT", &format, "json, csv or table"),
            }
        }

        if let Some(paths) = lookup("ECONSIM_PATHS") {
            match paths.parse() {
                Ok(paths) => self.paths = paths,
                Err(_) => self.reject("ECONSIM_PATHS", &paths, "a path count"),
            }
        }

        self
    }

    fn reject(&mut self, key: &str, value: &str, expected: &str) {
        self.rejected_overrides
            .push(format!("{}='{}' is not {}", key, value, expected));
    }

    /// Validate the configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.rejected_overrides.clone();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.risk_free_rate.is_finite() || !(-0.5..=1.0).contains(&self.risk_free_rate) {
            errors.push(format!(
                "risk_free_rate {} must be a decimal rate in [-0.5, 1.0]",
                self.risk_free_rate
            ));
        }

        if self.paths == 0 {
            errors.push("paths must be greater than 0".to_string());
        }
        if self.paths > 1_000_000 {
            errors.push(format!(
                "paths {} exceeds maximum allowed (1,000,000)",
                self.paths
            ));
        }

        let alerts = &self.alerts;
        let limits = [
            ("max_risk_score", alerts.max_risk_score),
            ("max_volatility_pct", alerts.max_volatility_pct),
            ("max_drawdown_pct", alerts.max_drawdown_pct),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("alerts.{} must be a non-negative number", name));
            }
        }
        if !alerts.min_real_return_pct.is_finite() {
            errors.push("alerts.min_real_return_pct must be finite".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults), apply environment overrides and validate.
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
