use thiserror::Error;

use secant_expr::{CompiledFunction, DEFAULT_VARIABLE, ParseError, compile};
use secant_solvers::equation::secant::{
    Config, ConfigError, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

/// The inputs of one run.
///
/// Built once per invocation and not changed while the run is going.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    expression: String,
    variable: String,
    x0: f64,
    x1: f64,
    tolerance: f64,
    max_iterations: usize,
}

/// Errors from reading a numeric input field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a real number, got `{text}`")]
    NotANumber { field: &'static str, text: String },

    #[error("{field} must be finite, got `{text}`")]
    NotFinite { field: &'static str, text: String },

    #[error("initial estimate must be finite, got {value}")]
    NonFiniteEstimate { value: f64 },
}

impl RunConfig {
    /// Creates a config with the default tolerance, iteration cap, and
    /// variable name.
    pub fn new(expression: impl Into<String>, x0: f64, x1: f64) -> Self {
        Self {
            expression: expression.into(),
            variable: DEFAULT_VARIABLE.to_owned(),
            x0,
            x1,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Builds a config from free-text fields.
    ///
    /// Every field is trimmed first. A missing, blank, or unparsable
    /// tolerance falls back to [`DEFAULT_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` or `x1` is not a finite real number.
    pub fn parse(
        expression: &str,
        x0: &str,
        x1: &str,
        tolerance: Option<&str>,
    ) -> Result<Self, InputError> {
        let x0 = parse_estimate("x0", x0)?;
        let x1 = parse_estimate("x1", x1)?;
        Ok(Self::new(expression.trim(), x0, x1).with_tolerance(parse_tolerance(tolerance)))
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the name of the free variable in the expression.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the starting estimates `[x0, x1]`.
    #[must_use]
    pub fn estimates(&self) -> [f64; 2] {
        [self.x0, self.x1]
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Compiles the expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the expression or variable is invalid.
    pub fn compile(&self) -> Result<CompiledFunction, ParseError> {
        compile(&self.expression, &self.variable)
    }

    /// Returns the validated solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance or iteration cap is out of range.
    pub fn solver_config(&self) -> Result<Config, ConfigError> {
        Config::new(self.max_iterations, self.tolerance)
    }
}

/// Parses a starting estimate.
///
/// # Errors
///
/// Returns an error naming `field` if the trimmed text is not a finite real
/// number.
pub fn parse_estimate(field: &'static str, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        text: trimmed.to_owned(),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite {
            field,
            text: trimmed.to_owned(),
        })
    }
}

/// Parses a tolerance, falling back to [`DEFAULT_TOLERANCE`].
///
/// A value that parses is returned as is, even if it is negative or NaN;
/// [`Config::new`] rejects those.
#[must_use]
pub fn parse_tolerance(text: Option<&str>) -> f64 {
    text.and_then(|text| text.trim().parse().ok())
        .unwrap_or(DEFAULT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = RunConfig::new("x^2 - 2", 1.0, 2.0);
        assert_eq!(config.expression(), "x^2 - 2");
        assert_eq!(config.variable(), "x");
        assert_eq!(config.estimates(), [1.0, 2.0]);
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.max_iterations(), 50);
    }

    #[test]
    fn parse_trims_fields() {
        let config =
            RunConfig::parse("  cos(x) - x ", " 0 ", "1\n", Some(" 1e-8 ")).expect("valid");
        assert_eq!(config.expression(), "cos(x) - x");
        assert_eq!(config.estimates(), [0.0, 1.0]);
        assert_eq!(config.tolerance(), 1e-8);
    }

    #[test]
    fn blank_or_garbage_tolerance_falls_back() {
        assert_eq!(parse_tolerance(None), DEFAULT_TOLERANCE);
        assert_eq!(parse_tolerance(Some("")), DEFAULT_TOLERANCE);
        assert_eq!(parse_tolerance(Some("   ")), DEFAULT_TOLERANCE);
        assert_eq!(parse_tolerance(Some("tiny")), DEFAULT_TOLERANCE);
    }

    #[test]
    fn parsed_tolerance_is_not_replaced() {
        assert_eq!(parse_tolerance(Some("-1")), -1.0);
        assert!(parse_tolerance(Some("NaN")).is_nan());

        let config = RunConfig::parse("x", "0", "1", Some("-1")).expect("valid fields");
        assert_eq!(config.solver_config(), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_bad_estimates() {
        assert_eq!(
            RunConfig::parse("x", "one", "2", None),
            Err(InputError::NotANumber {
                field: "x0",
                text: "one".into(),
            })
        );
        assert_eq!(
            RunConfig::parse("x", "1", "inf", None),
            Err(InputError::NotFinite {
                field: "x1",
                text: "inf".into(),
            })
        );
        assert!(matches!(
            parse_estimate("x0", ""),
            Err(InputError::NotANumber { field: "x0", .. })
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = parse_estimate("x1", " abc ").expect_err("not a number");
        assert_eq!(err.to_string(), "x1 must be a real number, got `abc`");
    }

    #[test]
    fn builders_override_defaults() {
        let config = RunConfig::new("t - 1", 0.0, 2.0)
            .with_variable("t")
            .with_tolerance(1e-10)
            .with_max_iterations(5);
        assert_eq!(config.variable(), "t");
        assert_eq!(
            config.solver_config(),
            Ok(Config::new(5, 1e-10).expect("valid"))
        );
        assert!(config.compile().is_ok());
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let config = RunConfig::new("x", 0.0, 1.0).with_max_iterations(0);
        assert_eq!(config.solver_config(), Err(ConfigError::MaxIterations));
    }
}
