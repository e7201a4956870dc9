//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the Newton and secant solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that know their iteration index
//! - [`HasIterate`] — events that carry the newest iterate
//! - [`HasStepError`] — events that carry the step size of the iteration
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasStepError};
//!
//! /// Stops once a step is small enough, well before the solver tolerance.
//! struct GoodEnough {
//!     step: f64,
//! }
//!
//! impl<E: HasStepError, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step_error() < self.step).then(A::stop_early)
//!     }
//! }
//! ```

use rootfind_solvers::equation::{newton, secant};

/// An event that knows which iteration produced it.
pub trait HasIteration {
    /// Returns the 0-based iteration index.
    fn iteration(&self) -> usize;
}

/// An event that carries the newest iterate.
pub trait HasIterate {
    /// Returns the unrounded iterate produced by this iteration.
    fn iterate(&self) -> f64;
}

/// An event that carries the step size of its iteration.
pub trait HasStepError {
    /// Returns the unrounded distance between the last two iterates.
    fn step_error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton::Event ---

impl HasIteration for newton::Event<'_> {
    fn iteration(&self) -> usize {
        self.exact.iter
    }
}

impl HasIterate for newton::Event<'_> {
    fn iterate(&self) -> f64 {
        self.exact.x_next
    }
}

impl HasStepError for newton::Event<'_> {
    fn step_error(&self) -> f64 {
        self.exact.error
    }
}

// --- secant::Event ---

impl HasIteration for secant::Event<'_> {
    fn iteration(&self) -> usize {
        self.exact.iter
    }
}

impl HasIterate for secant::Event<'_> {
    fn iterate(&self) -> f64 {
        self.exact.x2
    }
}

impl HasStepError for secant::Event<'_> {
    fn step_error(&self) -> f64 {
        self.exact.error
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use rootfind_solvers::equation::Config;

    #[test]
    fn newton_event_exposes_unrounded_step() {
        let mut steps = Vec::new();
        newton::solve(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            1.0,
            &Config::default(),
            |event: &newton::Event<'_>| {
                steps.push((event.iteration(), event.iterate(), event.step_error()));
                None
            },
        );

        let (iteration, iterate, step_error) = steps[1];
        assert_eq!(iteration, 1);
        assert_relative_eq!(iterate, 17.0 / 12.0, epsilon = 1e-15);
        assert_relative_eq!(step_error, 1.0 / 12.0, epsilon = 1e-15);
    }

    #[test]
    fn secant_event_exposes_unrounded_step() {
        let mut steps = Vec::new();
        secant::solve(
            |x| x * x - 2.0,
            1.0,
            2.0,
            &Config::default(),
            |event: &secant::Event<'_>| {
                steps.push((event.iteration(), event.iterate(), event.step_error()));
                None
            },
        );

        let (iteration, iterate, step_error) = steps[0];
        assert_eq!(iteration, 0);
        assert_relative_eq!(iterate, 4.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(step_error, 2.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn stop_early_constructs_the_solver_action() {
        assert_eq!(newton::Action::stop_early(), newton::Action::StopEarly);
        assert_eq!(secant::Action::stop_early(), secant::Action::StopEarly);
    }
}
