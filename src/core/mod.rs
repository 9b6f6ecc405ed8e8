//! Result payload and library-wide error structures.

/// Outcome of a hit-or-miss estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Number of trials satisfying the hit condition.
    pub hits: u64,
    /// Total number of trials performed.
    pub trials: u64,
    /// Estimated area, `hits / trials`. Always in `[0, 1]`.
    pub value: f64,
    /// Binomial standard error of the estimate, `sqrt(p * (1 - p) / trials)`.
    pub stderr: f64,
}

impl Estimate {
    /// Builds an estimate from a raw hit count.
    pub(crate) fn from_hits(hits: u64, trials: u64) -> Self {
        let n = trials as f64;
        let p = hits as f64 / n;
        Self {
            hits,
            trials,
            value: p,
            stderr: crate::math::binomial_stderr(p, n),
        }
    }
}

/// Errors surfaced by the estimation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    /// Input validation error.
    InvalidInput(String),
    /// Numerical issue (non-finite integrand evaluation, etc.).
    NumericalError(String),
}

impl std::fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for EstimatorError {}
