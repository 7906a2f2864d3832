use std::{convert::Infallible, fmt, str::FromStr};

use secant_core::Function;

use crate::{
    ast::Expr,
    builtin::{Builtin, Constant},
    error::{ParseError, ParseErrorKind},
    parser::parse,
};

/// The variable name used when none is given.
pub const DEFAULT_VARIABLE: &str = "x";

/// A compiled single-variable expression.
///
/// Compilation resolves every name up front, so evaluation never fails;
/// out-of-domain inputs produce NaN or infinities instead.
///
/// The function is immutable and can be shared freely, for example between a
/// solver and a plot sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunction {
    text: String,
    variable: String,
    expr: Expr,
}

/// Compiles `text` into a function of `variable`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not a valid expression, references
/// a name other than `variable` or a known constant or function, or if
/// `variable` itself is not a usable identifier.
pub fn compile(text: &str, variable: &str) -> Result<CompiledFunction, ParseError> {
    validate_variable(variable)?;
    let expr = parse(text, variable)?;
    Ok(CompiledFunction {
        text: text.to_owned(),
        variable: variable.to_owned(),
        expr,
    })
}

impl CompiledFunction {
    /// Returns the source text the function was compiled from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the name of the free variable.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// Evaluates the function element-wise, preserving length and order.
    #[must_use]
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl Function for CompiledFunction {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Infallible> {
        Ok(self.eval(x))
    }

    fn call_many(&self, xs: &[f64]) -> Result<Vec<f64>, Infallible> {
        Ok(self.eval_many(xs))
    }
}

impl FromStr for CompiledFunction {
    type Err = ParseError;

    /// Compiles a function of [`DEFAULT_VARIABLE`].
    fn from_str(text: &str) -> Result<Self, ParseError> {
        compile(text, DEFAULT_VARIABLE)
    }
}

impl fmt::Display for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f({}) = {}", self.variable, self.text)
    }
}

fn validate_variable(variable: &str) -> Result<(), ParseError> {
    let mut chars = variable.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    let is_identifier = starts_well && chars.all(|c| c.is_alphanumeric() || c == '_');
    let is_reserved = Constant::lookup(variable).is_some() || Builtin::lookup(variable).is_some();

    if is_identifier && !is_reserved {
        Ok(())
    } else {
        Err(ParseError::new(
            ParseErrorKind::InvalidVariable(variable.to_owned()),
            0,
            variable,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_scalars() {
        let f = compile("x^2 - 2", "x").expect("valid expression");
        assert_relative_eq!(f.eval(2.0_f64.sqrt()), 0.0, epsilon = 1e-12);
        assert_eq!(f.call(3.0), Ok(7.0));
    }

    #[test]
    fn evaluates_slices_elementwise() {
        let f = compile("2*x + 1", "x").expect("valid expression");
        assert_eq!(f.eval_many(&[0.0, 1.0, -1.0]), vec![1.0, 3.0, -1.0]);
        assert_eq!(f.call_many(&[2.0]), Ok(vec![5.0]));
    }

    #[test]
    fn domain_errors_become_non_finite_values() {
        let f = compile("log(x) + 1/x", "x").expect("valid expression");
        assert!(f.eval(-1.0).is_nan());
        assert!(f.eval(0.0).is_nan());
        let g = compile("1/x", "x").expect("valid expression");
        assert!(g.eval(0.0).is_infinite());
    }

    #[test]
    fn keeps_source_for_display() {
        let f: CompiledFunction = "cos(x) - x".parse().expect("valid expression");
        assert_eq!(f.text(), "cos(x) - x");
        assert_eq!(f.variable(), "x");
        assert_eq!(f.to_string(), "f(x) = cos(x) - x");
    }

    #[test]
    fn compilation_is_deterministic() {
        let a = compile("sin(x) * exp(-x)", "x").expect("valid expression");
        let b = compile("sin(x) * exp(-x)", "x").expect("valid expression");
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_expression() {
        let err = compile("2*x +", "x").expect_err("malformed");
        assert_eq!(err.text, "2*x +");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
    }

    #[test]
    fn rejects_unusable_variable_names() {
        for bad in ["", "2x", "x y", "pi", "sin"] {
            let err = compile("1", bad).expect_err("invalid variable");
            assert_eq!(err.kind, ParseErrorKind::InvalidVariable(bad.to_owned()));
        }
    }

    #[test]
    fn deep_nesting_is_an_error_not_a_crash() {
        let text = format!("{}x{}", "(".repeat(200_000), ")".repeat(200_000));
        let err = compile(&text, "x").expect_err("too deep");
        assert_eq!(err.kind, ParseErrorKind::TooDeep(crate::MAX_DEPTH));
        assert_eq!(
            err.to_string(),
            format!("expression nests deeper than 256 levels at position 256 in `{text}`")
        );
    }

    #[test]
    fn can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledFunction>();
    }
}
