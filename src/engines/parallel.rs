//! Parallel estimation with deterministic per-chunk random streams.
//!
//! Trials are split into one chunk per worker thread; each chunk owns a
//! generator seeded from [`stream_seed`], and the per-chunk hit counts are
//! combined with an associative sum. The result is reproducible for a given
//! seed and chunk layout regardless of thread scheduling, but the streams
//! differ from the sequential strategies, so parallel hit counts are not
//! comparable trial-for-trial with scalar or vectorized runs.

use rayon::prelude::*;

use crate::core::{Estimate, EstimatorError};
use crate::engines::vectorized::count_hits_vectorized;
use crate::integrand::Integrand;
use crate::math::rng::{stream_seed, Xoshiro256PlusPlus};
use rand::SeedableRng;

#[inline]
fn split_trials(trials: u64, n_chunks: usize) -> Vec<u64> {
    let chunks = n_chunks.max(1) as u64;
    let base = trials / chunks;
    let rem = trials % chunks;
    (0..chunks)
        .map(|i| if i < rem { base + 1 } else { base })
        .filter(|&n| n > 0)
        .collect()
}

/// Estimates the area under `integrand` over `trials` draws across the rayon
/// thread pool.
pub fn estimate_parallel<I>(
    integrand: &I,
    trials: u64,
    seed: u64,
) -> Result<Estimate, EstimatorError>
where
    I: Integrand,
{
    if trials == 0 {
        return Err(EstimatorError::InvalidInput(
            "trials must be > 0".to_string(),
        ));
    }

    let chunks = split_trials(trials, rayon::current_num_threads());
    let hits = chunks
        .par_iter()
        .enumerate()
        .map(|(i, &chunk)| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(stream_seed(seed, i));
            count_hits_vectorized(integrand, chunk, &mut rng)
        })
        .try_reduce(|| 0_u64, |lhs, rhs| Ok(lhs + rhs))?;

    Ok(Estimate::from_hits(hits, trials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrand::UnitParabola;

    #[test]
    fn split_covers_all_trials_without_empty_chunks() {
        for &(trials, threads) in &[(10_u64, 4_usize), (3, 8), (1_000_003, 7), (1, 1)] {
            let chunks = split_trials(trials, threads);
            assert_eq!(chunks.iter().sum::<u64>(), trials);
            assert!(chunks.iter().all(|&n| n > 0));
            assert!(chunks.len() <= threads.max(1));
        }
    }

    #[test]
    fn parallel_estimate_is_deterministic_for_a_seed() {
        let a = estimate_parallel(&UnitParabola, 200_000, 42).expect("valid run");
        let b = estimate_parallel(&UnitParabola, 200_000, 42).expect("valid run");
        assert_eq!(a.hits, b.hits);
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn parallel_estimate_converges_to_one_third() {
        let est = estimate_parallel(&UnitParabola, 1_000_000, 7).expect("valid run");
        assert!((est.value - UnitParabola::EXACT).abs() < 0.005);
    }

    #[test]
    fn zero_trials_is_rejected() {
        let err = estimate_parallel(&UnitParabola, 0, 1).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput(_)));
    }
}
