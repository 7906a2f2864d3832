/// Actions an observer can take during a secant run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current record and return the trace so far.
    StopEarly,
}
