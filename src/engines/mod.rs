//! Hit-or-miss estimation engines.
//!
//! The same contract runs under two execution strategies: a scalar per-trial
//! loop and a block-buffered vectorized form. Both consume the seeded random
//! stream in the same order and produce identical hit counts; they differ
//! only in constant-factor cost. A rayon-backed parallel entry point lives
//! behind the `parallel` feature.

pub mod scalar;
pub mod vectorized;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use scalar::count_hits_scalar;
pub use vectorized::{count_hits_vectorized, BLOCK_TRIALS};

#[cfg(feature = "parallel")]
pub use parallel::estimate_parallel;

use rand::{Rng, SeedableRng};

use crate::core::{Estimate, EstimatorError};
use crate::integrand::{Integrand, UnitParabola};
use crate::math::Xoshiro256PlusPlus;

/// Execution strategy for a sequential run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Per-trial loop; the baseline the chapter benchmarks against.
    Scalar,
    /// Block-buffered bulk sampling and comparison.
    #[default]
    Vectorized,
}

/// Seeded hit-or-miss area estimator.
///
/// Owns its trial count, seed, and strategy; every run builds a fresh local
/// generator from the seed, so runs are re-entrant and reproducible.
#[derive(Debug, Clone, Copy)]
pub struct HitOrMissEngine {
    /// Number of trials per run.
    pub trials: u64,
    /// Seed for the run's random stream.
    pub seed: u64,
    /// Execution strategy.
    pub strategy: Strategy,
}

impl HitOrMissEngine {
    /// Creates an engine with the default (vectorized) strategy.
    pub fn new(trials: u64, seed: u64) -> Self {
        Self {
            trials,
            seed,
            strategy: Strategy::default(),
        }
    }

    /// Sets the execution strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Runs the estimator with a generator seeded from `self.seed`.
    pub fn run<I>(&self, integrand: &I) -> Result<Estimate, EstimatorError>
    where
        I: Integrand + ?Sized,
    {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        self.run_with_rng(integrand, &mut rng)
    }

    /// Runs the estimator against a caller-supplied uniform source.
    ///
    /// `self.seed` is ignored; the caller controls the stream. Useful for
    /// comparing generators or plugging in [`rand::rngs::StdRng`].
    pub fn run_with_rng<I, R>(
        &self,
        integrand: &I,
        rng: &mut R,
    ) -> Result<Estimate, EstimatorError>
    where
        I: Integrand + ?Sized,
        R: Rng,
    {
        if self.trials == 0 {
            return Err(EstimatorError::InvalidInput(
                "trials must be > 0".to_string(),
            ));
        }

        let hits = match self.strategy {
            Strategy::Scalar => count_hits_scalar(integrand, self.trials, rng)?,
            Strategy::Vectorized => count_hits_vectorized(integrand, self.trials, rng)?,
        };

        Ok(Estimate::from_hits(hits, self.trials))
    }
}

/// Estimates the integral of `x^2` over `[0, 1]` with a fresh OS-derived seed.
///
/// Convenience entry point matching the chapter's `estimate(N)` interface.
/// Aborts if the OS entropy source is unavailable (the thread RNG has no
/// recovery strategy); use [`HitOrMissEngine`] with an explicit seed for
/// reproducible runs.
pub fn estimate(trials: u64) -> Result<f64, EstimatorError> {
    let seed = rand::rng().random::<u64>();
    HitOrMissEngine::new(trials, seed)
        .run(&UnitParabola)
        .map(|estimate| estimate.value)
}
