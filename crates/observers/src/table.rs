//! Fixed-decimal text table of iteration records.

use std::io::{self, Write};

use secant_core::Observer;
use secant_solvers::equation::secant::IterationRecord;

use crate::traits::CanStopEarly;

/// Column headers, in record field order.
pub const HEADERS: [&str; 7] = [
    "Iteration",
    "x_(i-1)",
    "f(x_(i-1))",
    "x_i",
    "f(x_i)",
    "x_(i+1)",
    "ε_a",
];

/// Decimals used when none are configured.
pub const DEFAULT_DECIMALS: usize = 6;

const INDEX_WIDTH: usize = 9;
const VALUE_WIDTH: usize = 14;

/// Formats the header line.
#[must_use]
pub fn format_header() -> String {
    let mut cells = vec![format!("{:>INDEX_WIDTH$}", HEADERS[0])];
    cells.extend(HEADERS[1..].iter().map(|h| format!("{h:>VALUE_WIDTH$}")));
    cells.join(" | ")
}

/// Formats one record as a table row with `decimals` digits after the point.
///
/// Infinite values, such as the relative error of a step landing on zero,
/// print as `inf`.
#[must_use]
pub fn format_row(record: &IterationRecord, decimals: usize) -> String {
    let values = [
        record.x_prev,
        record.f_x_prev,
        record.x_curr,
        record.f_x_curr,
        record.x_next,
        record.relative_error,
    ];

    let mut cells = vec![format!("{:>INDEX_WIDTH$}", record.index)];
    cells.extend(
        values
            .iter()
            .map(|value| format!("{value:>VALUE_WIDTH$.decimals$}")),
    );
    cells.join(" | ")
}

/// An observer that writes each record as a table row.
///
/// The header is written before the first row. Rows are written as they
/// arrive, so a terminal shows progress while a run is going.
///
/// A write failure is kept and the observer asks the solver to stop early;
/// [`TableObserver::finish`] reports it.
///
/// # Example
///
/// ```rust
/// use secant_observers::table::TableObserver;
/// use secant_solvers::equation::secant::{self, Config};
///
/// let f = |x: f64| x * x - 2.0;
/// let mut table = TableObserver::new(Vec::new()).with_decimals(4);
/// secant::solve(&f, [1.0, 2.0], &Config::default(), &mut table).unwrap();
///
/// let text = String::from_utf8(table.finish().unwrap()).unwrap();
/// assert!(text.lines().next().unwrap().contains("Iteration"));
/// ```
#[derive(Debug)]
pub struct TableObserver<W: Write> {
    writer: W,
    decimals: usize,
    header_written: bool,
    error: Option<io::Error>,
}

impl<W: Write> TableObserver<W> {
    /// Creates a table writer with [`DEFAULT_DECIMALS`].
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            decimals: DEFAULT_DECIMALS,
            header_written: false,
            error: None,
        }
    }

    /// Sets the number of decimals printed for each value.
    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Writes one record, preceded by the header if this is the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_record(&mut self, record: &IterationRecord) -> io::Result<()> {
        self.write_header()?;
        writeln!(self.writer, "{}", format_row(record, self.decimals))
    }

    /// Flushes the writer and returns it.
    ///
    /// The header is written even if no record arrived, so an empty run still
    /// produces a labelled table.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen while observing, or any error from
    /// the final write and flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.write_header()?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_header(&mut self) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.writer, "{}", format_header())?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write, A: CanStopEarly> Observer<IterationRecord, A> for TableObserver<W> {
    fn observe(&mut self, record: &IterationRecord) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        match self.write_record(record) {
            Ok(()) => None,
            Err(error) => {
                self.error = Some(error);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut TableObserver<W>` to be passed to solvers that take an
/// observer by value, so [`TableObserver::finish`] can be called afterwards.
impl<W: Write, A: CanStopEarly> Observer<IterationRecord, A> for &mut TableObserver<W> {
    fn observe(&mut self, record: &IterationRecord) -> Option<A> {
        (**self).observe(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use secant_solvers::equation::secant::{Action, Config, Status, solve};

    fn record() -> IterationRecord {
        IterationRecord {
            index: 1,
            x_prev: 1.0,
            f_x_prev: -1.0,
            x_curr: 2.0,
            f_x_curr: 2.0,
            x_next: 4.0 / 3.0,
            relative_error: 0.5,
        }
    }

    /// A writer that always fails.
    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn header_names_every_column() {
        let header = format_header();
        let cells: Vec<&str> = header.split(" | ").map(str::trim).collect();
        assert_eq!(cells, HEADERS);
    }

    #[test]
    fn row_uses_fixed_decimals() {
        let row = format_row(&record(), 3);
        let cells: Vec<&str> = row.split(" | ").map(str::trim).collect();
        assert_eq!(
            cells,
            ["1", "1.000", "-1.000", "2.000", "2.000", "1.333", "0.500"]
        );
    }

    #[test]
    fn row_prints_infinite_error() {
        let mut record = record();
        record.x_next = 0.0;
        record.relative_error = f64::INFINITY;
        let row = format_row(&record, DEFAULT_DECIMALS);
        assert!(row.ends_with("inf"));
        assert!(row.contains("0.000000"));
    }

    #[test]
    fn writes_header_then_one_row_per_record() {
        let f = |x: f64| x * x - 2.0;
        let mut table = TableObserver::new(Vec::new());
        let solution = solve(&f, [1.0, 2.0], &Config::default(), &mut table).expect("should solve");

        let text = String::from_utf8(table.finish().expect("no io error")).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), solution.iters + 1);
        assert_eq!(lines[0], format_header());
        assert_eq!(
            lines[1],
            format_row(&solution.trace.records()[0], DEFAULT_DECIMALS)
        );
    }

    #[test]
    fn empty_run_still_has_header() {
        let f = |x: f64| x - x;
        let mut table = TableObserver::new(Vec::new());
        let solution = solve(&f, [0.0, 1.0], &Config::default(), &mut table).expect("should stall");
        assert_eq!(solution.status, Status::Stalled);

        let text = String::from_utf8(table.finish().expect("no io error")).expect("utf-8");
        assert_eq!(text, format!("{}\n", format_header()));
    }

    #[test]
    fn write_failure_stops_run_and_is_reported() {
        let f = |x: f64| x * x - 2.0;
        let mut table = TableObserver::new(Broken);
        let solution = solve(&f, [1.0, 2.0], &Config::default(), &mut table).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
        let err = table.finish().expect_err("write failed");
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn observing_directly_returns_no_action() {
        let mut table = TableObserver::new(Vec::new()).with_decimals(1);
        let action: Option<Action> = table.observe(&record());
        assert!(action.is_none());
    }
}
