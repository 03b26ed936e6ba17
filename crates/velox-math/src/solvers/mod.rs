//! Root-finding algorithms.
//!
//! This module provides the numerical solvers behind the XIRR engine:
//!
//! - [`brent`]: Robust method combining bisection, secant, and inverse
//!   quadratic interpolation
//! - [`bisection`]: Simple and reliable bracketing method
//! - [`find_bracket`]: Deterministic sign-change search producing the
//!   bracket the solvers require
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! Brent converges superlinearly but is intolerant of a poor bracket;
//! bisection halves the bracket every step and cannot fail on a valid one,
//! only run out of budget. Callers wanting both properties run Brent first
//! and fall back to bisection.

mod bisection;
mod bracket;
mod brent;

pub use bisection::bisection;
pub use bracket::find_bracket;
pub use brent::brent;

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default maximum iterations for root-finding algorithms.
///
/// Effectively unbounded: convergence or bracket failure stops the solvers
/// long before this many steps.
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000_000_000_000;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u64) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u64,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// An interval known (or hoped) to contain a sign change.
///
/// Invariants enforced at construction: `low < high` and `low > -1`, the
/// latter because the XIRR discount base `1 + rate` must stay positive for
/// fractional exponents.
///
/// # Example
///
/// ```rust
/// use velox_math::solvers::Bracket;
///
/// let bracket = Bracket::new(-0.3, 10.0).unwrap();
/// assert_eq!(bracket.low(), -0.3);
/// assert!(Bracket::new(-1.5, 10.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Creates a bracket, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` when `low >= high`, `low <= -1`,
    /// or either bound is not finite.
    pub fn new(low: f64, high: f64) -> MathResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(MathError::invalid_input(format!(
                "bracket bounds must be finite, got [{low}, {high}]"
            )));
        }
        if low >= high {
            return Err(MathError::invalid_input(format!(
                "bracket low must be below high, got [{low}, {high}]"
            )));
        }
        if low <= -1.0 {
            return Err(MathError::invalid_input(format!(
                "bracket low must be above -1, got {low}"
            )));
        }
        Ok(Self { low, high })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_default_constants() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_bracket_invariants() {
        assert!(Bracket::new(-0.3, 10.0).is_ok());
        assert!(Bracket::new(10.0, -0.3).is_err());
        assert!(Bracket::new(0.5, 0.5).is_err());
        assert!(Bracket::new(-1.0, 10.0).is_err());
        assert!(Bracket::new(f64::NAN, 10.0).is_err());
        assert!(Bracket::new(0.0, f64::INFINITY).is_err());
    }
}
