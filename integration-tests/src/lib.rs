//! Shared helpers for end-to-end tests.

use secant_core::Observer;
use secant_engine::{Engine, RunConfig, RunError, Summary};
use secant_solvers::equation::secant::{Action, IterationRecord};

/// An observer that keeps a copy of every record it sees.
#[derive(Debug, Default)]
pub struct Recorder {
    pub records: Vec<IterationRecord>,
}

impl Observer<IterationRecord, Action> for &mut Recorder {
    fn observe(&mut self, record: &IterationRecord) -> Option<Action> {
        self.records.push(*record);
        None
    }
}

/// Runs `config` on a fresh engine, returning the result, the engine, and
/// the records the observer received.
pub fn run(config: &RunConfig) -> (Result<Summary, RunError>, Engine, Vec<IterationRecord>) {
    let mut engine = Engine::new();
    let mut recorder = Recorder::default();
    let result = engine.run(config, &mut recorder);
    (result, engine, recorder.records)
}

/// Builds a config from text fields, the way a form would.
///
/// # Panics
///
/// Panics if an estimate does not parse.
pub fn from_fields(expression: &str, x0: &str, x1: &str, tolerance: &str) -> RunConfig {
    RunConfig::parse(expression, x0, x1, Some(tolerance)).expect("estimates should parse")
}
