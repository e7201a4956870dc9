//! Core traits and types for the rootfind solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Precision`] — the decimal precision a tolerance implies for trace values
//! - [`tolerance`] — parsing of user-entered tolerances such as `"10^-4"`

mod observer;
mod precision;

pub mod tolerance;

pub use observer::Observer;
pub use precision::Precision;
