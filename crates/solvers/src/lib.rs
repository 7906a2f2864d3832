//! Numerical solvers built on the [`Function`] and [`Observer`] traits.
//!
//! - [`equation::secant`] — derivative-free root finding from two estimates
//!
//! [`Function`]: secant_core::Function
//! [`Observer`]: secant_core::Observer

pub mod equation;
