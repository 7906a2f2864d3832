use thiserror::Error;

/// Iteration cap used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Relative error tolerance used when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Smallest `|f(x_prev) − f(x_curr)|` for which a secant step is attempted.
pub const STAGNATION_THRESHOLD: f64 = 1e-12;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iterations: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iterations must be at least 1")]
    MaxIterations,

    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// A zero tolerance is allowed; such a run never converges and ends by
    /// stalling or by exhausting `max_iterations`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is zero or `tolerance` is negative
    /// or non-finite.
    pub fn new(max_iterations: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::MaxIterations);
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iterations,
            tolerance,
        })
    }

    /// Returns the maximum number of records a run may emit.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the relative error tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
