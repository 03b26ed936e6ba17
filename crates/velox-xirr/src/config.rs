//! Engine configuration.

use serde::{Deserialize, Serialize};

use velox_math::solvers::{Bracket, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::error::{XirrError, XirrResult};

/// Default lower bound of the initial rate search interval (-30%).
pub const DEFAULT_BRACKET_LOW: f64 = -0.3;

/// Default upper bound of the initial rate search interval (1000%).
pub const DEFAULT_BRACKET_HIGH: f64 = 10.0;

/// Configuration for an XIRR calculation.
///
/// Defaults come from named constants: tolerance
/// [`DEFAULT_TOLERANCE`], iteration budget [`DEFAULT_MAX_ITERATIONS`]
/// (effectively unbounded), and the initial search interval
/// [`DEFAULT_BRACKET_LOW`]..[`DEFAULT_BRACKET_HIGH`].
///
/// The iteration budget applies independently to each solver phase and to
/// the bracket scan; it is the only bound on work, so a small value
/// deliberately starves the engine into the NaN sentinel.
///
/// # Example
///
/// ```rust
/// use velox_xirr::XirrConfig;
///
/// let config = XirrConfig::default()
///     .with_tolerance(1e-9)
///     .with_bracket(-0.5, 20.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XirrConfig {
    /// Absolute convergence threshold on bracket width / function value.
    pub tolerance: f64,
    /// Hard cap on solver steps, per phase.
    pub max_iterations: u64,
    /// Lower bound of the initial rate search interval.
    pub bracket_low: f64,
    /// Upper bound of the initial rate search interval.
    pub bracket_high: f64,
}

impl Default for XirrConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bracket_low: DEFAULT_BRACKET_LOW,
            bracket_high: DEFAULT_BRACKET_HIGH,
        }
    }
}

impl XirrConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u64, bracket_low: f64, bracket_high: f64) -> Self {
        Self {
            tolerance,
            max_iterations,
            bracket_low,
            bracket_high,
        }
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the initial rate search interval.
    #[must_use]
    pub fn with_bracket(mut self, low: f64, high: f64) -> Self {
        self.bracket_low = low;
        self.bracket_high = high;
        self
    }

    /// Validates the configuration and returns the initial bracket.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::InvalidConfig` when the tolerance is not a
    /// positive finite number, the iteration budget is zero, or the
    /// bracket violates `low < high` / `low > -1`.
    pub fn validate(&self) -> XirrResult<Bracket> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(XirrError::invalid_config(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(XirrError::invalid_config(
                "max_iterations must be at least 1",
            ));
        }
        Bracket::new(self.bracket_low, self.bracket_high)
            .map_err(|err| XirrError::invalid_config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = XirrConfig::default();
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.bracket_low, DEFAULT_BRACKET_LOW);
        assert_eq!(config.bracket_high, DEFAULT_BRACKET_HIGH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = XirrConfig::default()
            .with_tolerance(1e-9)
            .with_max_iterations(500)
            .with_bracket(-0.9, 50.0);

        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.max_iterations, 500);
        let bracket = config.validate().unwrap();
        assert_eq!(bracket.low(), -0.9);
        assert_eq!(bracket.high(), 50.0);
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        assert!(XirrConfig::default().with_tolerance(0.0).validate().is_err());
        assert!(XirrConfig::default()
            .with_tolerance(-1e-7)
            .validate()
            .is_err());
        assert!(XirrConfig::default()
            .with_tolerance(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_zero_budget() {
        assert!(XirrConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_bad_bracket() {
        assert!(XirrConfig::default()
            .with_bracket(10.0, -0.3)
            .validate()
            .is_err());
        assert!(XirrConfig::default()
            .with_bracket(-1.0, 10.0)
            .validate()
            .is_err());
        assert!(XirrConfig::default()
            .with_bracket(-2.0, 10.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = XirrConfig::default().with_tolerance(1e-6);
        let json = serde_json::to_string(&config).unwrap();
        let back: XirrConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
