//! Solvers for scalar equations: finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`secant`] — superlinear convergence from two starting estimates, no
//!   derivative or bracket required

mod evaluate;

pub use evaluate::{EvalError, Evaluation, evaluate};

pub mod secant;
