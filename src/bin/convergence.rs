//! Convergence and timing table for the hit-or-miss estimator.
//!
//! Runs the scalar and vectorized strategies over increasing trial counts and
//! prints the estimate, its error against the exact value 1/3, the binomial
//! standard error, and wall time per run.
//!
//! Usage: `convergence [seed]` (seed defaults to 42).

use std::time::Instant;

use mcarea::engines::{HitOrMissEngine, Strategy};
use mcarea::integrand::UnitParabola;

fn main() {
    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("usage: convergence [seed]");
                std::process::exit(2);
            }
        },
        None => 42,
    };

    println!("hit-or-miss estimate of \u{222b} x\u{b2} dx over [0,1], seed = {seed}");
    println!(
        "{:>10}  {:>10}  {:>9}  {:>9}  {:>9}  {:>10}",
        "trials", "strategy", "estimate", "|error|", "stderr", "elapsed"
    );

    for exp in 3..=7_u32 {
        let trials = 10_u64.pow(exp);
        for (label, strategy) in [
            ("scalar", Strategy::Scalar),
            ("vectorized", Strategy::Vectorized),
        ] {
            let engine = HitOrMissEngine::new(trials, seed).with_strategy(strategy);
            let start = Instant::now();
            let est = match engine.run(&UnitParabola) {
                Ok(est) => est,
                Err(err) => {
                    eprintln!("estimation failed: {err}");
                    std::process::exit(1);
                }
            };
            let elapsed = start.elapsed();

            println!(
                "{:>10}  {:>10}  {:>9.6}  {:>9.6}  {:>9.6}  {:>8.2?}",
                trials,
                label,
                est.value,
                (est.value - UnitParabola::EXACT).abs(),
                est.stderr,
                elapsed
            );
        }
    }
}
