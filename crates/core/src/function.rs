use std::convert::Infallible;

/// A scalar function of one real variable.
///
/// Functions must be deterministic, always producing the same result for a
/// given `x`. Solvers rely on this to reuse values instead of re-evaluating,
/// and plotting code relies on it to sample the same curve the solver saw.
///
/// Returning a non-finite value is not an error at this level; solvers decide
/// how to treat NaN and infinities.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type for evaluation failures.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;

    /// Evaluates the function element-wise over `xs`.
    ///
    /// The output has the same length and order as the input.
    ///
    /// # Errors
    ///
    /// Returns the first evaluation error encountered.
    fn call_many(&self, xs: &[f64]) -> Result<Vec<f64>, Self::Error> {
        xs.iter().map(|&x| self.call(x)).collect()
    }
}

/// Plain closures are infallible functions.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Infallible> {
        Ok(self(x))
    }
}
