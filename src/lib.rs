//! mcarea estimates areas under functions on the unit square by hit-or-miss
//! Monte Carlo sampling, with the same contract offered under scalar,
//! vectorized, and parallel execution strategies.
//!
//! The canonical example is the integral of x² over [0, 1]: draw two uniforms
//! per trial, count a hit when `u2 < u1²`, and the hit ratio converges to 1/3
//! by the law of large numbers. The scalar and vectorized strategies consume
//! a seeded random stream in the same order and produce identical hit counts,
//! so the vectorized form is a pure constant-factor optimization.
//!
//! References used across modules:
//! - Glasserman (2004) for Monte Carlo estimators and variance.
//! - Blackman and Vigna (2021) for the xoshiro256++ generator.
//!
//! Numerical considerations:
//! - Estimates carry a binomial standard error; confidence is sampling-driven
//!   and shrinks as 1/sqrt(N).
//! - All randomness is explicit: engines are seeded per run and hold no
//!   process-wide state.
//!
//! # Feature Flags
//! - `parallel`: enables rayon-powered chunked estimation with deterministic
//!   per-chunk stream seeds.
//! - `simd`: enables an AVX2 bulk hit-count kernel where available.
//!
//! # Quick Start
//! Estimate the area under x² with a fixed seed:
//! ```rust
//! use mcarea::engines::HitOrMissEngine;
//! use mcarea::integrand::UnitParabola;
//!
//! let est = HitOrMissEngine::new(100_000, 42).run(&UnitParabola).unwrap();
//! assert!((est.value - 1.0 / 3.0).abs() < 0.02);
//! assert!(est.value >= 0.0 && est.value <= 1.0);
//! ```
//!
//! Closures work directly as integrands:
//! ```rust
//! use mcarea::engines::HitOrMissEngine;
//!
//! let est = HitOrMissEngine::new(100_000, 7).run(&|x: f64| 1.0 - x).unwrap();
//! assert!((est.value - 0.5).abs() < 0.02);
//! ```
//!
//! Degenerate trial counts are rejected before sampling:
//! ```rust
//! use mcarea::core::EstimatorError;
//! use mcarea::engines::HitOrMissEngine;
//! use mcarea::integrand::UnitParabola;
//!
//! let err = HitOrMissEngine::new(0, 1).run(&UnitParabola).unwrap_err();
//! assert!(matches!(err, EstimatorError::InvalidInput(_)));
//! ```

pub mod core;
pub mod engines;
pub mod integrand;
pub mod math;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{Estimate, EstimatorError};
    pub use crate::engines::{estimate, HitOrMissEngine, Strategy};
    pub use crate::integrand::{Integrand, UnitParabola};
    pub use crate::math::Xoshiro256PlusPlus;

    #[cfg(feature = "parallel")]
    pub use crate::engines::estimate_parallel;
}
