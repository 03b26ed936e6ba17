//! Sign-change search for the bracketing solvers.

use crate::solvers::Bracket;

/// Lowest rate the scan will ever probe, just above the -100% boundary
/// where the discount base `1 + rate` stops being positive.
const SCAN_FLOOR: f64 = -0.999_999_99;

/// Upper end of the fine scan.
const FINE_SCAN_LIMIT: f64 = 10.0;

/// Step width of the fine scan.
const FINE_STEP: f64 = 1e-4;

/// Upper end of the coarse scan.
const COARSE_SCAN_LIMIT: f64 = 10_000.0;

/// Step width of the coarse scan.
const COARSE_STEP: f64 = 10.0;

/// True when two function values straddle a root (a zero counts).
///
/// NaN values never count as a sign change: `NaN * x` comparisons are
/// false, so probes where the function overflowed into NaN are skipped.
fn straddles(fa: f64, fb: f64) -> bool {
    fa * fb <= 0.0
}

/// Searches for an interval over which `f` changes sign.
///
/// The initial candidate is checked first: if its endpoint values already
/// have opposite signs (or either is exactly zero), it is returned as-is.
/// Otherwise a deterministic two-stage grid scan runs upward from just
/// above -100%: fine steps of `1e-4` up to `10`, then coarse steps of `10`
/// up to `10000`, returning the first adjacent probe pair that straddles a
/// root. The scan spends at most `max_iter` probes.
///
/// Rates at or below `-1` are never evaluated.
///
/// # Example
///
/// ```rust
/// use velox_math::solvers::{find_bracket, Bracket};
///
/// // Root at -0.95, outside the default candidate interval
/// let f = |x: f64| x + 0.95;
/// let initial = Bracket::new(-0.3, 10.0).unwrap();
///
/// let found = find_bracket(&f, &initial, u64::MAX).unwrap();
/// assert!(f(found.low()) * f(found.high()) <= 0.0);
/// ```
pub fn find_bracket<F>(f: &F, initial: &Bracket, max_iter: u64) -> Option<Bracket>
where
    F: Fn(f64) -> f64,
{
    if straddles(f(initial.low()), f(initial.high())) {
        return Some(*initial);
    }

    let mut budget = max_iter;
    if budget == 0 {
        return None;
    }
    budget -= 1;
    let mut prev = f(SCAN_FLOOR);

    // Fine sweep over the economically plausible range
    let mut rate = SCAN_FLOOR + FINE_STEP;
    while rate <= FINE_SCAN_LIMIT {
        if budget == 0 {
            return None;
        }
        budget -= 1;
        let value = f(rate);
        if straddles(prev, value) {
            return Bracket::new(rate - FINE_STEP, rate).ok();
        }
        prev = value;
        rate += FINE_STEP;
    }

    // Coarse sweep for rates far outside the plausible range
    let mut rate = FINE_SCAN_LIMIT + COARSE_STEP;
    while rate <= COARSE_SCAN_LIMIT {
        if budget == 0 {
            return None;
        }
        budget -= 1;
        let value = f(rate);
        if straddles(prev, value) {
            return Bracket::new(rate - COARSE_STEP, rate).ok();
        }
        prev = value;
        rate += COARSE_STEP;
    }

    None
}
