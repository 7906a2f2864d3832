//! Core traits for the secant root-finding workspace.
//!
//! This crate defines the shared abstractions that the expression compiler,
//! the solvers, and the observers build on:
//!
//! - [`Function`] — a deterministic scalar function `ℝ → ℝ` that may fail
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
