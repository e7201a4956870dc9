//! Secant iteration for scalar equations.
//!
//! # Algorithm
//!
//! The secant method replaces Newton's derivative with the slope through the
//! two most recent iterates:
//!
//! ```text
//! x_{n+2} = x_{n+1} - f(x_{n+1}) * (x_{n+1} - x_n) / (f(x_{n+1}) - f(x_n))
//! ```
//!
//! Each iteration first checks the slope denominator. If
//! `|f(x_{n+1}) - f(x_n)| < NEAR_ZERO` the solve ends as
//! [`Status::Degenerate`] with no root. This also covers two equal starting
//! points, which are not rejected up front. Otherwise the step is recorded and
//! the solve converges once `|x_{n+2} - x_{n+1}| < tolerance`.
//!
//! Unlike [`newton`](super::newton), there is no separate check on the function
//! value. If the iteration budget runs out, the last iterate is returned with
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

#[cfg(test)]
mod tests;

pub use action::Action;
pub use event::Event;
pub use record::Record;

use rootfind_core::Observer;

use super::{Config, NEAR_ZERO, Solution, Status};

const SOLVER: &str = "secant";

/// Finds a root of `f` using secant iteration from the points `x0` and `x1`.
///
/// The observer receives an [`Event`] after each recorded step; see the
/// [module docs](self) for the stopping rules.
pub fn solve<F, Obs>(f: F, x0: f64, x1: f64, config: &Config, mut observer: Obs) -> Solution<Record>
where
    F: Fn(f64) -> f64,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let precision = config.precision();
    let mut trace = Vec::new();
    let (mut x0, mut x1) = (x0, x1);

    for iter in 0..config.max_iters() {
        let fx0 = f(x0);
        let fx1 = f(x1);
        let slope_span = fx1 - fx0;

        if slope_span.abs() < NEAR_ZERO {
            return Solution::finish(SOLVER, Status::Degenerate, None, iter, trace, precision);
        }

        let x2 = x1 - fx1 * (x1 - x0) / slope_span;
        let error = (x2 - x1).abs();
        tracing::trace!(solver = SOLVER, iter, x0, x1, fx0, fx1, x2, error, "step");

        let exact = Record {
            iter,
            x0,
            x1,
            fx0,
            fx1,
            x2,
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
                Some(x2),
                iter + 1,
                trace,
                precision,
            );
        }

        if error < config.tolerance() {
            return Solution::finish(
                SOLVER,
                Status::Converged,
                Some(x2),
                iter + 1,
                trace,
                precision,
            );
        }

        x0 = x1;
        x1 = x2;
    }

    Solution::finish(
        SOLVER,
        Status::MaxIters,
        Some(x1),
        config.max_iters(),
        trace,
        precision,
    )
}

/// Finds a root of `f` using secant iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<F>(f: F, x0: f64, x1: f64, config: &Config) -> Solution<Record>
where
    F: Fn(f64) -> f64,
{
    solve(f, x0, x1, config, ())
}
