use thiserror::Error;

use secant_expr::ParseError;
use secant_solvers::equation::secant::{self, ConfigError};

use crate::config::InputError;

/// Errors that can end a run.
///
/// Parse and input errors happen before any iteration. Numeric degeneracy and
/// evaluation errors end a run part way; the records produced before them
/// stay available from [`Engine::trace`](crate::Engine::trace).
#[derive(Debug, Error)]
pub enum RunError {
    /// The expression did not compile.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A starting estimate is not a finite real number.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// The tolerance or iteration cap is out of range.
    #[error("invalid solver config: {0}")]
    Config(#[from] ConfigError),

    /// The function produced a non-finite value, or a step produced a
    /// non-finite estimate.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(#[source] secant::Error),

    /// The function itself failed.
    #[error("{0}")]
    Evaluation(#[source] secant::Error),
}

impl RunError {
    /// Returns true if the run failed before any iteration was attempted.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Input(_) | Self::Config(_))
    }
}

impl From<secant::Error> for RunError {
    fn from(err: secant::Error) -> Self {
        match err {
            secant::Error::NonFiniteEstimate { value } => {
                Self::Input(InputError::NonFiniteEstimate { value })
            }
            err if err.is_numeric_degeneracy() => Self::NumericDegeneracy(err),
            err => Self::Evaluation(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_solver_errors() {
        let err = RunError::from(secant::Error::NonFiniteValue {
            x: 1.0,
            value: f64::NAN,
        });
        assert!(matches!(err, RunError::NumericDegeneracy(_)));
        assert_eq!(err.to_string(), "numeric degeneracy: f(1) is not finite: NaN");

        let err = RunError::from(secant::Error::NonFiniteEstimate { value: f64::NAN });
        assert!(matches!(
            err,
            RunError::Input(InputError::NonFiniteEstimate { .. })
        ));
        assert!(err.is_input_error());

        let err = RunError::from(secant::Error::Terminated);
        assert!(matches!(err, RunError::Evaluation(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn parse_errors_are_shown_verbatim() {
        let parse = secant_expr::compile("2*x +", "x").expect_err("malformed");
        let message = parse.to_string();
        assert_eq!(RunError::from(parse).to_string(), message);
    }
}
