//! Rayon-based parallelisation utilities.
//!
//! Scenario runs and simulation paths are independent, so batches are
//! mapped in parallel once they are large enough to amortise scheduling.
//! Each unit of work owns its own random source; nothing is shared.

use rayon::prelude::*;

/// Minimum number of items before parallel execution is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Always run sequentially.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Maps each item through a function, in parallel above the threshold.
///
/// Output order always matches input order.
pub fn parallel_map<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items.par_iter().map(mapper).collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

/// Maps the indices `0..n` through a function, in parallel above the threshold.
///
/// Output order always matches index order.
pub fn parallel_map_indices<R, F>(n: usize, config: &ParallelConfig, mapper: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> R + Sync + Send,
{
    if config.should_parallelize(n) {
        (0..n).into_par_iter().map(mapper).collect()
    } else {
        (0..n).map(mapper).collect()
    }
}
