use rootfind_core::Observer;

use crate::traits::{HasIterate, HasIteration, HasStepError};

/// Logs every solver iteration as a structured `tracing` event.
///
/// Each event is emitted at `INFO` level with the fields `solver`, `iter`,
/// `x` and `error`, where `x` and `error` are the unrounded values of the
/// step. The observer never steers the solver.
///
/// # Example
///
/// ```rust
/// use rootfind_observers::TracingObserver;
/// use rootfind_solvers::equation::{Config, newton};
///
/// let solution = newton::solve(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     &Config::default(),
///     TracingObserver::new("sqrt2"),
/// );
///
/// assert!(solution.is_converged());
/// ```
#[derive(Debug, Clone)]
pub struct TracingObserver {
    label: String,
    logged: usize,
}

impl TracingObserver {
    /// Creates an observer that tags its events with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            logged: 0,
        }
    }

    /// Returns the label attached to each event.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of iterations logged so far.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasIteration + HasIterate + HasStepError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::info!(
            solver = %self.label,
            iter = event.iteration(),
            x = event.iterate(),
            error = event.step_error(),
            "iteration"
        );
        self.logged += 1;
        None
    }
}

/// Allows `&mut TracingObserver` to be passed to solvers that take an observer
/// by value, so [`TracingObserver::logged`] can be read after the solve.
impl<E, A> Observer<E, A> for &mut TracingObserver
where
    E: HasIteration + HasIterate + HasStepError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
