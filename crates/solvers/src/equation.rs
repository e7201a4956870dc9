//! Solvers for scalar equations — finding a root of `f(x) = 0`.
//!
//! Every solver in this module returns a [`Solution`] holding the root (if one
//! was found), the iteration count, a terminal [`Status`], and a trace with one
//! record per iteration. Trace values are rounded to the [`Precision`] implied
//! by the configured tolerance, so the trace can be shown as-is.
//!
//! Numerical trouble is never an error. A vanishing derivative or secant slope
//! ends the solve with [`Status::Degenerate`] and no root, and running out of
//! iterations ends it with [`Status::MaxIters`] and the last iterate.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson iteration using a caller-supplied derivative
//! - [`secant`] — derivative-free two-point secant iteration
//!
//! [`Precision`]: rootfind_core::Precision

mod config;
mod solution;

pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};

pub mod newton;
pub mod secant;

/// Magnitude below which a function value, derivative, or secant slope is
/// treated as zero.
pub const NEAR_ZERO: f64 = 1e-12;
