use super::IterationRecord;

/// The ordered records of one run.
///
/// A trace only grows: records are appended in index order and never removed.
/// Start a new trace for a new run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunTrace {
    records: Vec<IterationRecord>,
}

impl RunTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next record.
    ///
    /// Records must arrive in order, each index one past the last.
    pub fn push(&mut self, record: IterationRecord) {
        debug_assert_eq!(
            record.index,
            self.records.len() + 1,
            "records must be appended in index order"
        );
        self.records.push(record);
    }

    /// Returns the records in order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    /// Returns the latest estimate, the `x_next` of the last record.
    #[must_use]
    pub fn last_estimate(&self) -> Option<f64> {
        self.last().map(|record| record.x_next)
    }

    /// Returns the best root estimate of a run started from `estimates`.
    ///
    /// This is the last record's `x_next`, or `x1` if the trace is empty.
    #[must_use]
    pub fn best_estimate(&self, [_, x1]: [f64; 2]) -> f64 {
        self.last_estimate().unwrap_or(x1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RunTrace {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RunTrace {
    type Item = IterationRecord;
    type IntoIter = std::vec::IntoIter<IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
