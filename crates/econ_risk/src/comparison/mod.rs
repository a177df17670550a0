//! Side-by-side comparison of scenario results.
//!
//! Ranks results by final balance, measures the spread, fills a
//! correlation matrix and derives a variability tier.

mod engine;

pub use engine::{
    ComparisonEngine, ComparisonResult, CorrelationMethod, Recommendation, ScenarioDifferences,
    Variability, HIGH_VARIABILITY_PCT, MODERATE_VARIABILITY_PCT, PLACEHOLDER_CORRELATION,
    RECOMMENDATION_CONFIDENCE,
};
