//! Numerical helpers shared by the model and risk layers.

pub mod stats;

pub use stats::{
    empirical_quantile, mean, pearson_correlation, simple_returns, sorted_ascending, std_dev,
    tail_index, variance_about,
};
