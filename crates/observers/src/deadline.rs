use std::time::{Duration, Instant};

use rootfind_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solve once a wall-clock budget has elapsed.
///
/// The clock starts when the deadline is created. The budget is checked after
/// every iteration, so a single slow function evaluation can overrun it.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
    expired: bool,
}

impl Deadline {
    /// Creates a deadline that expires `budget` from now.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
            expired: false,
        }
    }

    /// Returns the budget this deadline was created with.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns `true` if this deadline has stopped a solve.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        let elapsed = self.start.elapsed();
        if elapsed < self.budget {
            return None;
        }

        if !self.expired {
            tracing::warn!(?elapsed, budget = ?self.budget, "deadline expired");
            self.expired = true;
        }
        Some(A::stop_early())
    }
}

/// Allows `&mut Deadline` to be passed to solvers that take an observer by
/// value, so [`Deadline::expired`] can be read after the solve.
impl<E, A: CanStopEarly> Observer<E, A> for &mut Deadline {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use rootfind_solvers::equation::{Config, Status, newton, secant};

    #[test]
    fn zero_budget_stops_after_first_step() {
        let mut deadline = Deadline::new(Duration::ZERO);
        let solution = newton::solve(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            1.0,
            &Config::default(),
            &mut deadline,
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.trace.len(), 1);
        assert_relative_eq!(solution.root.unwrap(), 1.5);
        assert!(deadline.expired());
    }

    #[test]
    fn generous_budget_lets_secant_converge() {
        let mut deadline = Deadline::new(Duration::from_secs(3600));
        let solution = secant::solve(
            |x| x * x - 2.0,
            1.0,
            2.0,
            &Config::default(),
            &mut deadline,
        );

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.root.unwrap(), 2.0_f64.sqrt(), epsilon = 1e-9);
        assert!(!deadline.expired());
    }

    #[test]
    fn reports_its_budget() {
        let deadline = Deadline::new(Duration::from_millis(250));
        assert_eq!(deadline.budget(), Duration::from_millis(250));
    }
}
