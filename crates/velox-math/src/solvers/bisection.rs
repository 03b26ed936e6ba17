//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that repeatedly halves the
/// interval and keeps the half containing the sign change. Convergence is
/// linear (one bit of the answer per step), which makes it the safety net
/// rather than the first choice: given a valid bracket it can only fail by
/// running out of iterations.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at the endpoints).
/// Endpoint order does not matter; a reversed bracket is normalized.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One bound of the bracket
/// * `b` - The other bound of the bracket
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if the bracket is
/// invalid or the iteration budget runs out.
///
/// # Example
///
/// ```rust
/// use velox_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    // Check that root is bracketed
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    for iteration in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        // Check for convergence
        if f_mid.abs() < config.tolerance || (hi - lo).abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }

        // Keep the half that still brackets the sign change
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    let mid = (lo + hi) / 2.0;
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}
