//! Secant method for scalar root finding.
//!
//! # Algorithm
//!
//! Starting from two estimates `x_prev = x0` and `x_curr = x1`, each iteration
//! draws the line through `(x_prev, f(x_prev))` and `(x_curr, f(x_curr))` and
//! takes its zero crossing as the next estimate:
//!
//! ```text
//! x_next = x_curr − f(x_curr)·(x_prev − x_curr) / (f(x_prev) − f(x_curr))
//! ```
//!
//! The relative approximate error `|(x_next − x_curr) / x_next|` (infinite
//! when `x_next` is zero) is compared against the tolerance.
//!
//! # Termination
//!
//! Every run ends in exactly one [`Status`]:
//!
//! - [`Status::Converged`] — a record's relative error is strictly below the
//!   tolerance; its `x_next` is the root estimate.
//! - [`Status::Stalled`] — `|f(x_prev) − f(x_curr)|` fell below
//!   [`STAGNATION_THRESHOLD`] before a step could be taken. No record is
//!   emitted for that check, so a run that stalls on the initial pair has an
//!   empty trace.
//! - [`Status::Exhausted`] — `max_iterations` records were emitted without
//!   converging.
//! - [`Status::StoppedByObserver`] — the observer returned
//!   [`Action::StopEarly`].
//!
//! Non-finite function values and non-finite steps are errors, not statuses.
//!
//! # Consuming records
//!
//! [`iterate`] returns a lazy [`Iterations`] sequence: a record is produced
//! before the function is evaluated at its `x_next`. [`solve`] drives that
//! sequence, passes each [`IterationRecord`] to an observer as soon as it is
//! computed, and collects the [`RunTrace`].
//!
//! # Limitations
//!
//! - **No bracketing**: the iteration can diverge or wander when the starting
//!   estimates are far from a root.
//! - **One root**: the result depends on the starting estimates.

mod action;
mod config;
mod error;
mod iterations;
mod record;
mod solution;
mod trace;


pub use action::Action;
pub use config::{
    Config, ConfigError, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, STAGNATION_THRESHOLD,
};
pub use error::Error;
pub use iterations::{Iterations, Step};
pub use record::{IterationRecord, relative_error};
pub use solution::{Solution, Status};
pub use trace::RunTrace;

use secant_core::{Function, Observer};

/// Starts a lazy secant iteration from `estimates = [x0, x1]`.
///
/// Nothing is evaluated until the sequence is advanced.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEstimate`] if either estimate is NaN or infinite.
pub fn iterate<'a, F: Function>(
    function: &'a F,
    estimates: [f64; 2],
    config: &Config,
) -> Result<Iterations<'a, F>, Error> {
    if let Some(&value) = estimates.iter().find(|x| !x.is_finite()) {
        return Err(Error::NonFiniteEstimate { value });
    }
    Ok(Iterations::new(function, estimates, *config))
}

/// Finds a root of `function` with the secant method.
///
/// The observer receives every [`IterationRecord`] before the next iteration
/// starts and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if an estimate is not finite, the function fails or
/// returns a non-finite value, or a step produces a non-finite estimate.
pub fn solve<F, Obs>(
    function: &F,
    estimates: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<IterationRecord, Action>,
{
    let mut trace = RunTrace::new();
    let status = iterate(function, estimates, config)?.drive(observer, &mut trace)?;
    Ok(Solution::new(status, estimates, trace))
}

/// Finds a root without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    estimates: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, estimates, config, ())
}
