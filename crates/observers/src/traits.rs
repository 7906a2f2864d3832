//! Capability traits for record observers.
//!
//! These traits let an observer be written once against "anything that
//! reports a relative error" and "any action that can stop a run".
//!
//! # Example
//!
//! ```rust
//! use secant_core::Observer;
//! use secant_observers::traits::{CanStopEarly, HasRelativeError};
//!
//! /// Stops once the error has been small for `patience` records in a row.
//! struct Settled {
//!     threshold: f64,
//!     patience: usize,
//!     streak: usize,
//! }
//!
//! impl<E: HasRelativeError, A: CanStopEarly> Observer<E, A> for Settled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.relative_error() < self.threshold {
//!             self.streak += 1;
//!         } else {
//!             self.streak = 0;
//!         }
//!         (self.streak >= self.patience).then(A::stop_early)
//!     }
//! }
//! ```

use secant_solvers::equation::secant;

/// An event that carries a relative approximate error.
pub trait HasRelativeError {
    /// Returns the relative error for this event.
    fn relative_error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasRelativeError for secant::IterationRecord {
    fn relative_error(&self) -> f64 {
        self.relative_error
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use secant_core::Observer;
    use secant_solvers::equation::secant::{Action, Config, Status, solve};

    struct Settled {
        threshold: f64,
    }

    impl<E: HasRelativeError, A: CanStopEarly> Observer<E, A> for Settled {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.relative_error() < self.threshold).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_secant_run() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::new(50, 0.0).expect("valid config");

        let solution =
            solve(&f, [1.0, 2.0], &config, Settled { threshold: 1e-3 }).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        let last = solution.trace.last().expect("at least one record");
        assert!(last.relative_error < 1e-3);
    }

    #[test]
    fn secant_action_stops_early() {
        assert_eq!(Action::stop_early(), Action::StopEarly);
    }
}
