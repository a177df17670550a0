//! Fixed-sequence uniform source.

use super::UniformSource;
use crate::types::{EconError, EconResult};

/// Replays a fixed sequence of uniform values, cycling when exhausted.
///
/// Used to make stochastic paths exactly reproducible in tests and in
/// reference computations.
///
/// # Examples
///
/// ```rust
/// use econ_core::rng::{SequenceRng, UniformSource};
///
/// let mut rng = SequenceRng::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(rng.next_uniform(), 0.25);
/// assert_eq!(rng.next_uniform(), 0.75);
/// assert_eq!(rng.next_uniform(), 0.25);
/// assert_eq!(rng.draws(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    position: usize,
    draws: usize,
}

impl SequenceRng {
    /// Create a source from a non-empty list of values in [0, 1).
    pub fn new(values: Vec<f64>) -> EconResult<Self> {
        if values.is_empty() {
            return Err(EconError::invalid_input("sequence must not be empty"));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(EconError::invalid_input(format!(
                "sequence value {} outside [0, 1)",
                bad
            )));
        }
        Ok(Self {
            values,
            position: 0,
            draws: 0,
        })
    }

    /// A source that always returns 0.5, which neutralises symmetric noise.
    pub fn midpoint() -> Self {
        Self {
            values: vec![0.5],
            position: 0,
            draws: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for SequenceRng {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        self.draws += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_out_of_range() {
        assert!(SequenceRng::new(vec![]).is_err());
        assert!(SequenceRng::new(vec![0.1, 1.0]).is_err());
        assert!(SequenceRng::new(vec![-0.1]).is_err());
    }

    #[test]
    fn test_midpoint() {
        let mut rng = SequenceRng::midpoint();
        assert!((0..5).all(|_| rng.next_uniform() == 0.5));
        assert_eq!(rng.draws(), 5);
    }
}
