//! Scenario catalog and alerting.
//!
//! This module provides:
//! - [`ScenarioCatalog`]: CRUD over scenarios, active set, batch runs
//! - [`AlertThresholds`] / [`RiskAlert`]: threshold alerts on results
//! - [`CatalogError`]: catalog failures wrapping engine errors

mod alerts;
mod error;
mod store;

pub use alerts::{
    AlertMetric, AlertSeverity, AlertThresholds, RiskAlert, DEFAULT_MAX_DRAWDOWN_PCT,
    DEFAULT_MAX_RISK_SCORE, DEFAULT_MAX_VOLATILITY_PCT, DEFAULT_MIN_REAL_RETURN_PCT,
};
pub use error::{CatalogError, CatalogResult};
pub use store::ScenarioCatalog;
