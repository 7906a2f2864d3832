use std::iter::FusedIterator;

use secant_core::{Function, Observer};

use crate::equation::{Evaluation, evaluate};

use super::{Action, Config, Error, IterationRecord, RunTrace, STAGNATION_THRESHOLD, Status};

/// A lazy sequence of secant iterations.
///
/// Each call to [`Iterations::step`] evaluates at most one new point, so a
/// record is available before the function is evaluated at its `x_next`.
/// Every point is evaluated exactly once.
///
/// The sequence is finite. Once it has finished, `step` keeps returning the
/// same [`Step::Done`]; once it has failed, `step` returns
/// [`Error::Terminated`].
pub struct Iterations<'f, F: Function> {
    function: &'f F,
    config: Config,
    state: State,
}

impl<F: Function> std::fmt::Debug for Iterations<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iterations")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// The outcome of advancing an [`Iterations`] sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// A new record was produced.
    Record(IterationRecord),

    /// The run is over.
    Done(Status),
}

#[derive(Debug, Clone, Copy)]
enum State {
    Start {
        x0: f64,
        x1: f64,
    },
    Running {
        prev: Evaluation,
        x_curr: f64,
        index: usize,
    },
    Finished(Status),
    Failed,
}

impl<'f, F: Function> Iterations<'f, F> {
    pub(super) fn new(function: &'f F, [x0, x1]: [f64; 2], config: Config) -> Self {
        Self {
            function,
            config,
            state: State::Start { x0, x1 },
        }
    }

    /// Advances the sequence by one iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if the function fails or returns a non-finite value,
    /// if the step produces a non-finite estimate, or if a previous call
    /// already failed.
    pub fn step(&mut self) -> Result<Step, Error> {
        match self.advance() {
            Ok(step) => Ok(step),
            Err(error) => {
                self.state = State::Failed;
                Err(error)
            }
        }
    }

    /// Runs the sequence to the end, appending every record to `trace`.
    ///
    /// Each record goes to `observer` before it is appended and before the
    /// next iteration starts. [`Action::StopEarly`] ends the run with
    /// [`Status::StoppedByObserver`]. On error, `trace` keeps the records
    /// produced before it.
    ///
    /// # Errors
    ///
    /// See [`Iterations::step`].
    pub fn drive<Obs>(
        &mut self,
        mut observer: Obs,
        trace: &mut RunTrace,
    ) -> Result<Status, Error>
    where
        Obs: Observer<IterationRecord, Action>,
    {
        loop {
            match self.step()? {
                Step::Record(record) => {
                    let action = observer.observe(&record);
                    trace.push(record);
                    if let Some(Action::StopEarly) = action {
                        self.state = State::Finished(Status::StoppedByObserver);
                        return Ok(Status::StoppedByObserver);
                    }
                }
                Step::Done(status) => return Ok(status),
            }
        }
    }

    /// Returns the final status, or `None` while the run is still going or
    /// after it failed.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        match self.state {
            State::Finished(status) => Some(status),
            _ => None,
        }
    }

    fn advance(&mut self) -> Result<Step, Error> {
        let (prev, x_curr, index) = match self.state {
            State::Start { x0, x1 } => (evaluate(self.function, x0)?, x1, 1),
            State::Running {
                prev,
                x_curr,
                index,
            } => (prev, x_curr, index),
            State::Finished(status) => return Ok(Step::Done(status)),
            State::Failed => return Err(Error::Terminated),
        };

        let curr = evaluate(self.function, x_curr)?;

        let df = prev.value - curr.value;
        if df.abs() < STAGNATION_THRESHOLD {
            return Ok(self.finish(Status::Stalled));
        }

        let x_next = curr.x - curr.value * (prev.x - curr.x) / df;
        if !x_next.is_finite() {
            return Err(Error::NonFiniteStep {
                x_prev: prev.x,
                x_curr: curr.x,
            });
        }

        let record = IterationRecord::new(index, prev, curr, x_next);

        self.state = if record.relative_error < self.config.tolerance() {
            State::Finished(Status::Converged)
        } else if index >= self.config.max_iterations() {
            State::Finished(Status::Exhausted)
        } else {
            State::Running {
                prev: curr,
                x_curr: x_next,
                index: index + 1,
            }
        };

        Ok(Step::Record(record))
    }

    fn finish(&mut self, status: Status) -> Step {
        self.state = State::Finished(status);
        Step::Done(status)
    }
}

impl<F: Function> Iterator for Iterations<'_, F> {
    type Item = Result<IterationRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Failed) {
            return None;
        }
        match self.step() {
            Ok(Step::Record(record)) => Some(Ok(record)),
            Ok(Step::Done(_)) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

impl<F: Function> FusedIterator for Iterations<'_, F> {}
