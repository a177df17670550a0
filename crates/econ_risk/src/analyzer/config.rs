//! Risk analyser configuration.

use econ_core::types::{EconError, EconResult};

/// Default annual risk-free rate (decimal).
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Default VaR tail probability (95 % confidence).
pub const DEFAULT_VAR_TAIL: f64 = 0.05;

/// Default benchmark annual return (%).
pub const DEFAULT_BENCHMARK_RETURN_PCT: f64 = 10.0;

/// Default benchmark annualised volatility (%).
pub const DEFAULT_BENCHMARK_VOLATILITY_PCT: f64 = 15.0;

/// Default assumed correlation with the benchmark.
pub const DEFAULT_MARKET_CORRELATION: f64 = 0.7;

/// Parameters of the risk analyser.
///
/// # Examples
///
/// ```rust
/// use econ_risk::analyzer::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default().with_risk_free_rate(0.1075).unwrap();
/// assert!((config.risk_free_monthly() - 0.1075 / 12.0).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyzerConfig {
    /// Annual risk-free rate (decimal)
    pub risk_free_rate: f64,
    /// VaR / CVaR tail probability
    pub var_tail: f64,
    /// Benchmark annual return (%)
    pub benchmark_return_pct: f64,
    /// Benchmark annualised volatility (%)
    pub benchmark_volatility_pct: f64,
    /// Assumed correlation with the benchmark
    pub market_correlation: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            var_tail: DEFAULT_VAR_TAIL,
            benchmark_return_pct: DEFAULT_BENCHMARK_RETURN_PCT,
            benchmark_volatility_pct: DEFAULT_BENCHMARK_VOLATILITY_PCT,
            market_correlation: DEFAULT_MARKET_CORRELATION,
        }
    }
}

impl AnalyzerConfig {
    /// Set the annual risk-free rate and validate.
    pub fn with_risk_free_rate(mut self, rate: f64) -> EconResult<Self> {
        self.risk_free_rate = rate;
        self.validate()?;
        Ok(self)
    }

    /// Set the VaR tail probability and validate.
    pub fn with_var_tail(mut self, tail: f64) -> EconResult<Self> {
        self.var_tail = tail;
        self.validate()?;
        Ok(self)
    }

    /// Monthly risk-free rate.
    #[inline]
    pub fn risk_free_monthly(&self) -> f64 {
        self.risk_free_rate / 12.0
    }

    /// Validates the configuration.
    pub fn validate(&self) -> EconResult<()> {
        if !self.risk_free_rate.is_finite() {
            return Err(EconError::invalid_input("risk_free_rate must be finite"));
        }
        if self.var_tail.is_nan() || self.var_tail <= 0.0 || self.var_tail >= 1.0 {
            return Err(EconError::invalid_input(format!(
                "var_tail must be in (0, 1), got {}",
                self.var_tail
            )));
        }
        if !self.benchmark_volatility_pct.is_finite() || self.benchmark_volatility_pct <= 0.0 {
            return Err(EconError::invalid_input(
                "benchmark_volatility_pct must be positive",
            ));
        }
        if !self.benchmark_return_pct.is_finite() {
            return Err(EconError::invalid_input("benchmark_return_pct must be finite"));
        }
        if !(-1.0..=1.0).contains(&self.market_correlation) {
            return Err(EconError::invalid_input(format!(
                "market_correlation must be in [-1, 1], got {}",
                self.market_correlation
            )));
        }
        Ok(())
    }
}
