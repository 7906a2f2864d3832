use thiserror::Error;

use secant_core::Function;

/// A point `x` and the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub value: f64,
}

/// Errors that can occur when evaluating a function for a solver.
#[derive(Debug, Error)]
pub enum EvalError<FE> {
    /// The function itself failed.
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: FE,
    },

    /// The function returned NaN or an infinity.
    #[error("f({x}) is not finite: {value}")]
    NonFinite { x: f64, value: f64 },
}

/// Evaluates `function` at `x`, rejecting non-finite values.
///
/// # Errors
///
/// Returns an error if the function fails or its value is not finite.
pub fn evaluate<F: Function>(function: &F, x: f64) -> Result<Evaluation, EvalError<F::Error>> {
    let value = function
        .call(x)
        .map_err(|source| EvalError::Function { x, source })?;

    if !value.is_finite() {
        return Err(EvalError::NonFinite { x, value });
    }

    Ok(Evaluation { x, value })
}
