//! The function under integration.
//!
//! A hit-or-miss trial draws `(u1, u2)` uniformly from the unit square and
//! scores a hit when `u2 < f(u1)`, so the hit ratio estimates the area under
//! `f` over `[0, 1]`. Anything implementing [`Integrand`] can be estimated;
//! plain closures work through a blanket impl.

/// A function `f: [0, 1] -> [0, 1]` whose area is to be estimated.
pub trait Integrand: Sync {
    /// Evaluates `f(x)`.
    ///
    /// Values must stay within `[0, 1]`; finite values outside that range
    /// bias the estimate, non-finite values fail the run.
    fn eval(&self, x: f64) -> f64;

    /// Bulk hit count over a sampled block, or `None` to use the generic
    /// evaluate-then-compare path.
    ///
    /// Concrete integrands can override this with a specialized kernel; the
    /// override must produce exactly the count the generic path would.
    fn count_hits_block(&self, _xs: &[f64], _ys: &[f64]) -> Option<u64> {
        None
    }
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64 + Sync,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// The chapter's canonical integrand, `f(x) = x^2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitParabola;

impl UnitParabola {
    /// Exact value of the integral of `x^2` over `[0, 1]`.
    pub const EXACT: f64 = 1.0 / 3.0;
}

impl Integrand for UnitParabola {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        x * x
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    fn count_hits_block(&self, xs: &[f64], ys: &[f64]) -> Option<u64> {
        if is_x86_feature_detected!("avx2") {
            // SAFETY: Guarded by runtime CPU feature detection.
            return Some(unsafe { count_hits_square_avx2(xs, ys) });
        }
        None
    }
}

/// AVX2 hit count for `y < x * x`, four lanes at a time with a scalar tail.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
unsafe fn count_hits_square_avx2(xs: &[f64], ys: &[f64]) -> u64 {
    use std::arch::x86_64::*;

    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    let mut hits = 0_u64;

    let mut i = 0_usize;
    while i + 4 <= n {
        // SAFETY: bounds checked by loop condition.
        let x = unsafe { _mm256_loadu_pd(xs.as_ptr().add(i)) };
        // SAFETY: bounds checked by loop condition.
        let y = unsafe { _mm256_loadu_pd(ys.as_ptr().add(i)) };
        let fx = _mm256_mul_pd(x, x);
        let mask = _mm256_cmp_pd::<_CMP_LT_OQ>(y, fx);
        hits += _mm256_movemask_pd(mask).count_ones() as u64;
        i += 4;
    }

    while i < n {
        if ys[i] < xs[i] * xs[i] {
            hits += 1;
        }
        i += 1;
    }

    hits
}
