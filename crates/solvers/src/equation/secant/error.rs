use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur during a secant run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial estimate is not finite: {value}")]
    NonFiniteEstimate { value: f64 },

    #[error("f({x}) is not finite: {value}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("secant step through x = {x_prev} and x = {x_curr} produced a non-finite estimate")]
    NonFiniteStep { x_prev: f64, x_curr: f64 },

    #[error("function evaluation failed at x = {x}: {source}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("iteration already ended with an error")]
    Terminated,
}

impl Error {
    /// Returns true if the run ended because the arithmetic broke down.
    ///
    /// This covers non-finite function values and non-finite steps. It is
    /// distinct from stalling, which is a normal termination status.
    #[must_use]
    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(self, Self::NonFiniteValue { .. } | Self::NonFiniteStep { .. })
    }
}

impl<FE> From<EvalError<FE>> for Error
where
    FE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<FE>) -> Self {
        match err {
            EvalError::Function { x, source } => Self::Function {
                x,
                source: Box::new(source),
            },
            EvalError::NonFinite { x, value } => Self::NonFiniteValue { x, value },
        }
    }
}
