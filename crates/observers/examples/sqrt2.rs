//! Finds √2 as the positive root of x² − 2 with both solvers.
//!
//! Every iteration is logged through [`TracingObserver`], and each solve prints
//! its status, root and rounded trace.
//!
//! # Usage
//!
//! ```text
//! cargo run --example sqrt2
//! cargo run --example sqrt2 -- 10^-9
//! RUST_LOG=debug cargo run --example sqrt2 -- 1e-3
//! ```
//!
//! The optional argument is the tolerance, as a decimal or as `10^-k`.
//! Unparseable tolerances fall back to 1e-6.

use std::{fmt::Debug, time::Duration};

use rootfind_core::tolerance::{self, DEFAULT_TOLERANCE};
use rootfind_observers::{Deadline, TracingObserver};
use rootfind_solvers::equation::{Config, ConfigError, Solution, newton, secant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let tolerance = std::env::args()
        .nth(1)
        .as_deref()
        .map_or(DEFAULT_TOLERANCE, tolerance::parse_or_default);
    let config = Config::with_tolerance(tolerance)?;

    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let solution = newton::solve(f, df, 1.0, &config, TracingObserver::new("newton"));
    report("newton", &solution);

    let mut deadline = Deadline::new(Duration::from_secs(1));
    let solution = secant::solve(f, 1.0, 2.0, &config, &mut deadline);
    report("secant", &solution);
    println!("secant deadline expired: {}", deadline.expired());

    Ok(())
}

fn report<R: Debug>(label: &str, solution: &Solution<R>) {
    let Solution {
        status,
        root,
        iters,
        trace,
        precision,
    } = solution;
    let decimals = precision.decimals();

    println!("{label}: {status:?} root={root:?} iters={iters} ({decimals} decimals)");
    for record in trace {
        println!("  {record:?}");
    }
}
