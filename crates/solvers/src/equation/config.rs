use rootfind_core::{Precision, tolerance::DEFAULT_TOLERANCE};
use thiserror::Error;

/// Configuration shared by the Newton and secant solvers.
///
/// A `Config` is validated on construction, so every value reaching a solver
/// is usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Iteration budget used by [`Config::default`].
    pub const DEFAULT_MAX_ITERS: usize = 100;

    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Creates a config with the given tolerance and the default budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, Self::DEFAULT_MAX_ITERS)
    }

    /// Returns the step-size tolerance below which the solver has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the precision used to round trace values.
    #[must_use]
    pub fn precision(&self) -> Precision {
        Precision::from_tolerance(self.tolerance)
    }
}
