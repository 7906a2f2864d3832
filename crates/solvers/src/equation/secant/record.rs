use crate::equation::Evaluation;

/// One secant iteration: the two points the step was taken from and the
/// estimate it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// 1-based position in the trace.
    pub index: usize,

    /// The older point.
    pub x_prev: f64,

    /// Function value at `x_prev`.
    pub f_x_prev: f64,

    /// The newer point.
    pub x_curr: f64,

    /// Function value at `x_curr`.
    pub f_x_curr: f64,

    /// The estimate produced by this step.
    pub x_next: f64,

    /// `|(x_next − x_curr) / x_next|`, or `+∞` when `x_next` is zero.
    pub relative_error: f64,
}

impl IterationRecord {
    pub(super) fn new(index: usize, prev: Evaluation, curr: Evaluation, x_next: f64) -> Self {
        Self {
            index,
            x_prev: prev.x,
            f_x_prev: prev.value,
            x_curr: curr.x,
            f_x_curr: curr.value,
            x_next,
            relative_error: relative_error(curr.x, x_next),
        }
    }

    /// Returns the endpoints of the secant line used for this step.
    #[must_use]
    pub fn secant_line(&self) -> [[f64; 2]; 2] {
        [[self.x_prev, self.f_x_prev], [self.x_curr, self.f_x_curr]]
    }
}

/// Relative approximate error between successive estimates.
///
/// Returns `+∞` when `x_next` is exactly zero.
#[must_use]
pub fn relative_error(x_curr: f64, x_next: f64) -> f64 {
    #[allow(clippy::float_cmp)]
    if x_next == 0.0 {
        return f64::INFINITY;
    }
    ((x_next - x_curr) / x_next).abs()
}
