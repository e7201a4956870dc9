//! Scalar root finders for the rootfind workspace.
//!
//! See [`equation`] for the available solvers.

pub mod equation;
