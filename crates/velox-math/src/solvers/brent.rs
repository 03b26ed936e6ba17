//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines the reliability of bisection with the speed of the secant
/// method and inverse quadratic interpolation. Each step interpolates when
/// the trial point is safe and shrinks the bracket at least as fast as
/// bisection when it is not, so the method never diverges on a valid
/// bracket.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at the endpoints; an exact
/// zero at either endpoint is an immediate root).
///
/// Convergence uses the scale-aware width `tol1 = 2·tol·|b| + tol/2`: the
/// solver stops once the bracket half-width drops below `tol1` or `f(b)`
/// is exactly zero, returning the best estimate `b`.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
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
/// use velox_math::solvers::{brent, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-6);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    // Check that root is bracketed
    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // c tracks the previous value of a so that [b, c] keeps bracketing the
    // root; d is the last step taken, e the one before it.
    let mut c = a;
    let mut fc = fa;
    let mut d = 0.0_f64;
    let mut e = 0.0_f64;

    for iteration in 0..config.max_iterations {
        if fb * fc > 0.0 {
            // b and c no longer straddle the root; reset c to a
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            // Rotate so that b holds the endpoint with the smaller |f|
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * config.tolerance * b.abs() + 0.5 * config.tolerance;
        let m = 0.5 * (c - b);

        if m.abs() <= tol1 || fb == 0.0 {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let mut p;
            let mut q;
            if a == c {
                // Only two distinct points: secant step
                p = 2.0 * m * s;
                q = 1.0 - s;
            } else {
                // Inverse quadratic interpolation through (a, b, c)
                q = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * m * q * (q - r) - (b - a) * (r - 1.0));
                q = (q - 1.0) * (r - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            // Accept the interpolated step only if it stays well inside
            // the bracket and shrinks faster than the step before last
            if 2.0 * p < (3.0 * m * q - (tol1 * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }
        } else {
            d = m;
            e = m;
        }

        a = b;
        fa = fb;

        // Never step by less than the tolerance width
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(m);
        }
        fb = f(b);
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}
