use super::RunTrace;

/// How a secant run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last record's relative error is below the tolerance.
    Converged,

    /// The function values at the two current points were too close to take
    /// a step.
    Stalled,

    /// Reached the iteration limit without converging.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a secant run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    ///
    /// This is the last record's `x_next`, or the second starting estimate if
    /// no record was produced. It is only within tolerance when `status` is
    /// [`Status::Converged`].
    pub x: f64,

    /// Number of records produced.
    pub iters: usize,

    /// Every record of the run, in order.
    pub trace: RunTrace,
}

impl Solution {
    pub(super) fn new(status: Status, estimates: [f64; 2], trace: RunTrace) -> Self {
        Self {
            status,
            x: trace.best_estimate(estimates),
            iters: trace.len(),
            trace,
        }
    }
}
