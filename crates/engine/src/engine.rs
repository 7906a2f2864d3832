use secant_core::{Function, Observer};
use secant_solvers::equation::secant::{self, Action, IterationRecord, RunTrace, Status};

use crate::{RunConfig, RunError};

/// Owns the state of the current run.
///
/// Each call to [`Engine::run`] discards the previous trace before doing
/// anything else. Records are appended as they are produced, so after a
/// failed run [`Engine::trace`] holds everything computed before the error.
#[derive(Debug, Default)]
pub struct Engine {
    trace: RunTrace,
    status: Option<Status>,
}

/// The outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub status: Status,

    /// Best estimate of the root: the last `x_next`, or `x1` if no record was
    /// produced.
    pub x: f64,

    pub iters: usize,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles the expression in `config` and runs the secant method on it.
    ///
    /// The observer receives each record before the next iteration starts.
    ///
    /// # Errors
    ///
    /// Returns a [`RunError`] describing why the run could not start or
    /// could not finish.
    pub fn run<Obs>(&mut self, config: &RunConfig, observer: Obs) -> Result<Summary, RunError>
    where
        Obs: Observer<IterationRecord, Action>,
    {
        self.reset();
        let function = config.compile()?;
        self.run_function(&function, config, observer)
    }

    /// Runs without observation.
    ///
    /// # Errors
    ///
    /// See [`Engine::run`].
    pub fn run_unobserved(&mut self, config: &RunConfig) -> Result<Summary, RunError> {
        self.run(config, ())
    }

    /// Runs the secant method on an already compiled function.
    ///
    /// The expression and variable in `config` are ignored.
    ///
    /// # Errors
    ///
    /// See [`Engine::run`].
    pub fn run_function<F, Obs>(
        &mut self,
        function: &F,
        config: &RunConfig,
        observer: Obs,
    ) -> Result<Summary, RunError>
    where
        F: Function,
        Obs: Observer<IterationRecord, Action>,
    {
        self.reset();
        let solver_config = config.solver_config()?;
        let status = secant::iterate(function, config.estimates(), &solver_config)?
            .drive(observer, &mut self.trace)?;

        self.status = Some(status);
        Ok(Summary {
            status,
            x: self.trace.best_estimate(config.estimates()),
            iters: self.trace.len(),
        })
    }

    /// Returns the records of the latest run.
    #[must_use]
    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// Returns the status of the latest run, or `None` if it failed or no
    /// run has happened.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    fn reset(&mut self) {
        self.trace = RunTrace::new();
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn runs_expression_and_keeps_trace() {
        let mut engine = Engine::new();
        let summary = engine
            .run_unobserved(&RunConfig::new("x^2 - 2", 1.0, 2.0))
            .expect("should solve");

        assert_eq!(summary.status, Status::Converged);
        assert_eq!(engine.status(), Some(Status::Converged));
        assert_eq!(summary.iters, engine.trace().len());
        assert_relative_eq!(summary.x, 2.0_f64.sqrt(), epsilon = 1e-8);
    }

    #[test]
    fn new_run_replaces_previous_trace() {
        let mut engine = Engine::new();
        engine
            .run_unobserved(&RunConfig::new("x^2 - 2", 1.0, 2.0))
            .expect("should solve");
        assert!(!engine.trace().is_empty());

        let summary = engine
            .run_unobserved(&RunConfig::new("x - x", 0.0, 1.0))
            .expect("should stall");
        assert_eq!(summary.status, Status::Stalled);
        assert!(engine.trace().is_empty());
        assert_eq!(summary.x, 1.0);
    }

    #[test]
    fn failed_compile_clears_previous_run() {
        let mut engine = Engine::new();
        engine
            .run_unobserved(&RunConfig::new("x^2 - 2", 1.0, 2.0))
            .expect("should solve");

        let err = engine
            .run_unobserved(&RunConfig::new("2*x +", 1.0, 2.0))
            .expect_err("malformed");
        assert!(matches!(err, RunError::Parse(_)));
        assert!(engine.trace().is_empty());
        assert_eq!(engine.status(), None);
    }

    #[test]
    fn keeps_partial_trace_after_degeneracy() {
        // The first step lands on x = -2, outside the domain of sqrt.
        let mut engine = Engine::new();
        let config = RunConfig::new("x + 2 + 0*sqrt(x)", 1.0, 2.0);
        let err = engine.run_unobserved(&config).expect_err("nan after first step");

        assert!(matches!(err, RunError::NumericDegeneracy(_)));
        assert_eq!(engine.trace().len(), 1);
        assert_eq!(engine.status(), None);
    }

    #[test]
    fn observer_sees_each_record() {
        let mut engine = Engine::new();
        let mut seen = Vec::new();
        let summary = engine
            .run(
                &RunConfig::new("cos(x) - x", 0.0, 1.0).with_tolerance(1e-8),
                |record: &IterationRecord| -> Option<Action> {
                    seen.push(*record);
                    None
                },
            )
            .expect("should solve");

        assert_eq!(seen.as_slice(), engine.trace().records());
        assert_eq!(summary.iters, seen.len());
    }

    #[test]
    fn observer_can_stop_early() {
        let mut engine = Engine::new();
        let summary = engine
            .run(
                &RunConfig::new("x^2 - 2", 1.0, 2.0),
                |_: &IterationRecord| Some(Action::StopEarly),
            )
            .expect("should stop");

        assert_eq!(summary.status, Status::StoppedByObserver);
        assert_eq!(summary.iters, 1);
    }

    #[test]
    fn runs_precompiled_function() {
        let mut engine = Engine::new();
        let f = |x: f64| x.exp() - 2.0;
        let summary = engine
            .run_function(&f, &RunConfig::new("unused", 0.0, 1.0), ())
            .expect("should solve");
        assert_relative_eq!(summary.x, 2.0_f64.ln(), epsilon = 1e-9);
    }
}
