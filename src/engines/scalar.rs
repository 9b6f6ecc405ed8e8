//! Scalar hit counting: one trial per loop iteration.
//!
//! This is the pedagogical baseline. Each iteration draws two uniforms,
//! evaluates the integrand once, and bumps a local accumulator. Per-trial
//! overhead is what the vectorized form exists to amortize.

use rand::Rng;

use crate::core::EstimatorError;
use crate::integrand::Integrand;

/// Counts hits over `trials` draws, consuming `(u1, u2)` per trial in order.
pub fn count_hits_scalar<I, R>(
    integrand: &I,
    trials: u64,
    rng: &mut R,
) -> Result<u64, EstimatorError>
where
    I: Integrand + ?Sized,
    R: Rng,
{
    let mut hits = 0_u64;

    for _ in 0..trials {
        let u1: f64 = rng.random();
        let u2: f64 = rng.random();

        let fx = integrand.eval(u1);
        if !fx.is_finite() {
            return Err(EstimatorError::NumericalError(format!(
                "integrand returned a non-finite value at x = {u1}"
            )));
        }

        if u2 < fx {
            hits += 1;
        }
    }

    Ok(hits)
}
