//! Path simulator configuration.
//!
//! Provides [`SimulatorConfig`] and its builder. Defaults reproduce the
//! reference seasonal volatility model: amplitude 0.3 over a 12-month cycle,
//! applied to the scenario's market volatility alone. Event market deltas
//! only reach the volatility when `market_overlay` is switched on.

use crate::trajectory::DEFAULT_NOISE_RATIO;
use thiserror::Error;

/// Default amplitude of the seasonal volatility modulation.
pub const DEFAULT_SEASONAL_AMPLITUDE: f64 = 0.3;

/// Default length of the seasonal cycle in months.
pub const DEFAULT_SEASON_LENGTH: u32 = 12;

/// Configuration error for the path simulator.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Seasonal amplitude outside [0, 1].
    #[error("Invalid seasonal amplitude {0}: must be in range [0, 1]")]
    InvalidSeasonalAmplitude(f64),
    /// Season length of zero months.
    #[error("Invalid season length {0}: must be at least 1 month")]
    InvalidSeasonLength(u32),
    /// Volatile noise ratio negative or not finite.
    #[error("Invalid noise ratio {0}: must be non-negative")]
    InvalidNoiseRatio(f64),
}

/// Immutable simulator configuration.
///
/// # Examples
///
/// ```rust
/// use econ_models::simulator::SimulatorConfig;
///
/// let config = SimulatorConfig::builder()
///     .seasonal_amplitude(0.1)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seasonal_amplitude(), 0.1);
/// assert_eq!(config.season_length(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatorConfig {
    seasonal_amplitude: f64,
    season_length: u32,
    noise_ratio: f64,
    market_overlay: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seasonal_amplitude: DEFAULT_SEASONAL_AMPLITUDE,
            season_length: DEFAULT_SEASON_LENGTH,
            noise_ratio: DEFAULT_NOISE_RATIO,
            market_overlay: false,
        }
    }
}

impl SimulatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulatorConfigBuilder {
        SimulatorConfigBuilder::default()
    }

    /// Amplitude of the seasonal volatility modulation.
    #[inline]
    pub fn seasonal_amplitude(&self) -> f64 {
        self.seasonal_amplitude
    }

    /// Length of the seasonal cycle in months.
    #[inline]
    pub fn season_length(&self) -> u32 {
        self.season_length
    }

    /// Half-width of the volatile trajectory noise band.
    #[inline]
    pub fn noise_ratio(&self) -> f64 {
        self.noise_ratio
    }

    /// Whether active events shift the market volatility before seasonal modulation.
    #[inline]
    pub fn market_overlay(&self) -> bool {
        self.market_overlay
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.seasonal_amplitude) {
            return Err(ConfigError::InvalidSeasonalAmplitude(self.seasonal_amplitude));
        }
        if self.season_length == 0 {
            return Err(ConfigError::InvalidSeasonLength(self.season_length));
        }
        if !self.noise_ratio.is_finite() || self.noise_ratio < 0.0 {
            return Err(ConfigError::InvalidNoiseRatio(self.noise_ratio));
        }
        Ok(())
    }
}

/// Builder for [`SimulatorConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulatorConfigBuilder {
    seasonal_amplitude: Option<f64>,
    season_length: Option<u32>,
    noise_ratio: Option<f64>,
    market_overlay: Option<bool>,
}

impl SimulatorConfigBuilder {
    /// Sets the seasonal amplitude, in [0, 1].
    #[inline]
    pub fn seasonal_amplitude(mut self, amplitude: f64) -> Self {
        self.seasonal_amplitude = Some(amplitude);
        self
    }

    /// Sets the season length in months.
    #[inline]
    pub fn season_length(mut self, months: u32) -> Self {
        self.season_length = Some(months);
        self
    }

    /// Sets the volatile noise ratio.
    #[inline]
    pub fn noise_ratio(mut self, ratio: f64) -> Self {
        self.noise_ratio = Some(ratio);
        self
    }

    /// Adds event market deltas to the market volatility.
    #[inline]
    pub fn market_overlay(mut self, enabled: bool) -> Self {
        self.market_overlay = Some(enabled);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<SimulatorConfig, ConfigError> {
        let defaults = SimulatorConfig::default();
        let config = SimulatorConfig {
            seasonal_amplitude: self.seasonal_amplitude.unwrap_or(defaults.seasonal_amplitude),
            season_length: self.season_length.unwrap_or(defaults.season_length),
            noise_ratio: self.noise_ratio.unwrap_or(defaults.noise_ratio),
            market_overlay: self.market_overlay.unwrap_or(defaults.market_overlay),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::builder().build().unwrap();
        assert_eq!(config, SimulatorConfig::default());
        assert_eq!(config.seasonal_amplitude(), 0.3);
        assert_eq!(config.noise_ratio(), 0.2);
        assert!(!config.market_overlay());

        let config = SimulatorConfig::builder().market_overlay(true).build().unwrap();
        assert!(config.market_overlay());
        assert_eq!(config.season_length(), 12);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            SimulatorConfig::builder().seasonal_amplitude(1.5).build(),
            Err(ConfigError::InvalidSeasonalAmplitude(1.5))
        );
        assert_eq!(
            SimulatorConfig::builder().season_length(0).build(),
            Err(ConfigError::InvalidSeasonLength(0))
        );
        assert!(SimulatorConfig::builder().noise_ratio(f64::INFINITY).build().is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSeasonLength(0);
        assert!(err.to_string().contains("season length 0"));
    }
}
