use rootfind_core::Precision;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates how a root-finding solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// A root was found, either by function value or by step size.
    Converged,

    /// The update formula hit a near-zero denominator, so no root is reported.
    Degenerate,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding solve.
///
/// `R` is the solver's trace record type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate, or `None` when the solve was degenerate.
    pub root: Option<f64>,

    /// Iterations consumed when the solver finished.
    pub iters: usize,

    /// One rounded record per completed step, in iteration order.
    pub trace: Vec<R>,

    /// Precision the trace values were rounded to.
    pub precision: Precision,
}

impl<R> Solution<R> {
    /// Builds the solution and logs how the solve ended.
    pub(super) fn finish(
        solver: &'static str,
        status: Status,
        root: Option<f64>,
        iters: usize,
        trace: Vec<R>,
        precision: Precision,
    ) -> Self {
        tracing::debug!(solver, ?status, ?root, iters, "solve finished");
        Self {
            status,
            root,
            iters,
            trace,
            precision,
        }
    }

    /// Returns true if the solver converged to a root.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
