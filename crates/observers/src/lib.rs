//! Reusable observers for the rootfind solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both root finders.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasIterate`], [`HasStepError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — logs every iteration as a structured `tracing` event
//! - [`Deadline`] — stops a solve once a wall-clock budget has elapsed
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasIterate`]: traits::HasIterate
//! [`HasStepError`]: traits::HasStepError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod deadline;
mod log;

pub use deadline::Deadline;
pub use log::TracingObserver;
