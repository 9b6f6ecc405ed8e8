//! Numerical helpers shared by the estimation engines.

pub mod rng;

pub use rng::{stream_seed, Xoshiro256PlusPlus};

/// Standard error of a binomial proportion `p` over `n` trials.
///
/// This is the sampling-driven uncertainty every estimate carries. Callers
/// guarantee `n >= 1`.
#[inline]
pub fn binomial_stderr(p: f64, n: f64) -> f64 {
    (p * (1.0 - p) / n).sqrt()
}
