//! Newton-Raphson iteration for scalar equations.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration takes the step
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! and stops when one of the following holds, checked in this order:
//!
//! 1. `|f(x_n)| < NEAR_ZERO`: `x_n` is returned as the root without recording
//!    a step for this iteration.
//! 2. `|f'(x_n)| < NEAR_ZERO`: the step is undefined, so the solve ends as
//!    [`Status::Degenerate`] with no root.
//! 3. `|x_{n+1} - x_n| < tolerance`: `x_{n+1}` is returned as the root.
//!
//! If the iteration budget runs out, the last iterate is returned with
//! [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per recorded step. Observers can return
//! [`Action::StopEarly`] to end the solve with the newest iterate.
//!
//! [`Status::Degenerate`]: super::Status::Degenerate
//! [`Status::MaxIters`]: super::Status::MaxIters

mod action;
mod event;
mod record;


pub use action::Action;
pub use event::Event;
pub use record::Record;

use rootfind_core::Observer;

use super::{Config, NEAR_ZERO, Solution, Status};

const SOLVER: &str = "newton";

/// Finds a root of `f` using Newton-Raphson iteration from `x0`.
///
/// `df` must evaluate the derivative of `f`. The observer receives an
/// [`Event`] after each recorded step; see the [module docs](self) for the
/// stopping rules.
pub fn solve<F, D, Obs>(
    f: F,
    df: D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Solution<Record>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let precision = config.precision();
    let mut trace = Vec::new();
    let mut x = x0;

    for iter in 0..config.max_iters() {
        let fx = f(x);
        let dfx = df(x);

        if fx.abs() < NEAR_ZERO {
            return Solution::finish(
                SOLVER,
                Status::Converged,
                Some(x),
                iter + 1,
                trace,
                precision,
            );
        }

        if dfx.abs() < NEAR_ZERO {
            return Solution::finish(SOLVER, Status::Degenerate, None, iter, trace, precision);
        }

        let x_next = x - fx / dfx;
        let error = (x_next - x).abs();
        tracing::trace!(solver = SOLVER, iter, x, fx, dfx, x_next, error, "step");

        let exact = Record {
            iter,
            x,
            fx,
            dfx,
            x_next,
            error,
        };
        let rounded = exact.rounded(precision);
        let action = observer.observe(&Event {
            exact,
            rounded: &rounded,
        });
        trace.push(rounded);

        if let Some(Action::StopEarly) = action {
            return Solution::finish(
                SOLVER,
                Status::StoppedByObserver,
                Some(x_next),
                iter + 1,
                trace,
                precision,
            );
        }

        if error < config.tolerance() {
            return Solution::finish(
                SOLVER,
                Status::Converged,
                Some(x_next),
                iter + 1,
                trace,
                precision,
            );
        }

        x = x_next;
    }

    Solution::finish(
        SOLVER,
        Status::MaxIters,
        Some(x),
        config.max_iters(),
        trace,
        precision,
    )
}

/// Finds a root of `f` using Newton-Raphson iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<F, D>(f: F, df: D, x0: f64, config: &Config) -> Solution<Record>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(f, df, x0, config, ())
}
