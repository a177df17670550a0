//! # Random Number Generation Infrastructure
//!
//! Every stochastic step of the engine draws from an explicit
//! [`UniformSource`] passed in by the caller. There is no global generator.
//!
//! ## Design
//!
//! - **Reproducibility**: [`ScenarioRng`] is seeded; [`SequenceRng`] replays
//!   a fixed list of values
//! - **Independence**: batch runs create one generator per path with
//!   [`ScenarioRng::for_stream`], so parallel execution never correlates noise
//! - **Static dispatch**: callers take `&mut R where R: UniformSource + ?Sized`
//!
//! ## Usage Example
//!
//! ```rust
//! use econ_core::rng::{ScenarioRng, UniformSource};
//!
//! let mut rng = ScenarioRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod prng;
mod sequence;

pub use prng::ScenarioRng;
pub use sequence::SequenceRng;

/// A source of uniform random values in [0, 1).
pub trait UniformSource {
    /// Draw the next value in [0, 1).
    fn next_uniform(&mut self) -> f64;

    /// Draw a value in [-1, 1) centred on zero.
    #[inline]
    fn next_symmetric(&mut self) -> f64 {
        (self.next_uniform() - 0.5) * 2.0
    }
}

impl<R: UniformSource + ?Sized> UniformSource for &mut R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
