//! Runs the secant method on a textual expression.
//!
//! A [`RunConfig`] collects the inputs of one run, usually from free-text
//! fields. An [`Engine`] compiles the expression, drives the solver, hands
//! every record to an observer, and keeps the trace of the latest run.
//!
//! ```rust
//! use secant_engine::{Engine, RunConfig};
//! use secant_solvers::equation::secant::Status;
//!
//! let config = RunConfig::parse("x^2 - 2", "1", "2", None)?;
//! let mut engine = Engine::new();
//! let summary = engine.run_unobserved(&config)?;
//!
//! assert_eq!(summary.status, Status::Converged);
//! assert!((summary.x - 2.0_f64.sqrt()).abs() < 1e-8);
//! # Ok::<(), secant_engine::RunError>(())
//! ```

mod config;
mod engine;
mod error;

pub use config::{InputError, RunConfig, parse_estimate, parse_tolerance};
pub use engine::{Engine, Summary};
pub use error::RunError;
