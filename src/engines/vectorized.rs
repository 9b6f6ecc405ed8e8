//! Vectorized hit counting over pre-allocated sample blocks.
//!
//! Samples are drawn into reused block buffers, the integrand is evaluated
//! over the whole block, and the comparison mask is summed in bulk. Memory
//! stays bounded by the block size rather than growing with the trial count.
//!
//! Invariant: pairs are written in trial order (`u1[i]` then `u2[i]`), so the
//! random stream is consumed exactly as in the scalar loop and both
//! strategies produce identical hit counts for the same seed.

use rand::Rng;

use crate::core::EstimatorError;
use crate::integrand::Integrand;

/// Trials per sample block.
pub const BLOCK_TRIALS: usize = 1 << 16;

/// Counts hits over `trials` draws using block-buffered bulk evaluation.
pub fn count_hits_vectorized<I, R>(
    integrand: &I,
    trials: u64,
    rng: &mut R,
) -> Result<u64, EstimatorError>
where
    I: Integrand + ?Sized,
    R: Rng,
{
    let cap = trials.min(BLOCK_TRIALS as u64) as usize;
    let mut u1 = vec![0.0_f64; cap];
    let mut u2 = vec![0.0_f64; cap];
    let mut fx = vec![0.0_f64; cap];

    let mut hits = 0_u64;
    let mut remaining = trials;

    while remaining > 0 {
        let len = remaining.min(cap as u64) as usize;

        for i in 0..len {
            u1[i] = rng.random();
            u2[i] = rng.random();
        }

        let xs = &u1[..len];
        let ys = &u2[..len];

        hits += match integrand.count_hits_block(xs, ys) {
            Some(block_hits) => block_hits,
            None => {
                for (fi, &x) in fx[..len].iter_mut().zip(xs) {
                    *fi = integrand.eval(x);
                }

                if let Some(idx) = fx[..len].iter().position(|v| !v.is_finite()) {
                    return Err(EstimatorError::NumericalError(format!(
                        "integrand returned a non-finite value at x = {}",
                        xs[idx]
                    )));
                }

                fx[..len]
                    .iter()
                    .zip(ys)
                    .filter(|&(&f, &y)| y < f)
                    .count() as u64
            }
        };

        remaining -= len as u64;
    }

    Ok(hits)
}
