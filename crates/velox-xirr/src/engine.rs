//! XIRR calculation engine.
//!
//! Orchestrates normalization, bracket search, and the two solver phases:
//! Brent first for speed, bisection as the unconditionally convergent
//! fallback. Brent converges superlinearly but is intolerant of a poor
//! bracket and of rare degenerate interpolation steps; bisection is slow
//! but cannot fail on a valid bracket, only run out of budget.

use log::debug;

use velox_core::{CashFlow, CashFlowSeries, Date, NormalizedPoint};
use velox_math::solvers::{bisection, brent, find_bracket, Bracket, SolverConfig};

use crate::config::XirrConfig;
use crate::error::XirrResult;
use crate::npv::npv;

/// Fallback search interval for the bisection phase, deliberately wider
/// than the configured initial bracket so that roots Brent's interval
/// missed are still reachable.
const FALLBACK_BRACKET_LOW: f64 = -0.999_999;
const FALLBACK_BRACKET_HIGH: f64 = 100.0;

/// XIRR calculation engine.
///
/// Finds the annualized discount rate at which the net present value of an
/// irregularly-dated cash flow series is zero.
///
/// Numerical failure (no real root, non-convergence within the iteration
/// budget, or timing so degenerate that the annualized rate is unbounded)
/// is reported as the `f64::NAN` sentinel, never as an error. The only
/// `Err` is a malformed configuration, rejected before any solver work.
///
/// # Example
///
/// ```rust
/// use velox_core::Date;
/// use velox_xirr::XirrEngine;
///
/// let engine = XirrEngine::new();
/// let rate = engine
///     .calculate(&[
///         (-1000.0, Date::from_ymd(2019, 1, 1).unwrap()),
///         (1100.0, Date::from_ymd(2020, 1, 1).unwrap()),
///     ])
///     .unwrap();
///
/// assert!((rate - 0.10).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XirrEngine {
    config: XirrConfig,
}

impl XirrEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: XirrConfig::default(),
        }
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(config: XirrConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &XirrConfig {
        &self.config
    }

    /// Calculates the XIRR of calendar-dated cash flows.
    ///
    /// Dates are interpreted as UTC midnight. Returns the rate, or NaN
    /// when no sensible annualized rate exists.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::InvalidConfig` for a malformed configuration.
    pub fn calculate(&self, cashflows: &[(f64, Date)]) -> XirrResult<f64> {
        let series: CashFlowSeries = cashflows
            .iter()
            .map(|&(amount, date)| CashFlow::on(amount, date))
            .collect();
        self.calculate_series(&series)
    }

    /// Calculates the XIRR of cash flows dated by epoch timestamps.
    ///
    /// This is the boundary the numeric core consumes; calendar handling
    /// never reaches it.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::InvalidConfig` for a malformed configuration.
    pub fn calculate_from_timestamps(&self, cashflows: &[(f64, i64)]) -> XirrResult<f64> {
        let series: CashFlowSeries = cashflows
            .iter()
            .map(|&(amount, timestamp)| CashFlow::new(amount, timestamp))
            .collect();
        self.calculate_series(&series)
    }

    /// Calculates the XIRR of a cash flow series.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::InvalidConfig` for a malformed configuration.
    pub fn calculate_series(&self, series: &CashFlowSeries) -> XirrResult<f64> {
        let initial = self.config.validate()?;

        let points = series.normalize();
        if points.is_empty() {
            // No flows, no return; the canonical empty-series rate is zero
            return Ok(0.0);
        }

        let solver_config = SolverConfig::new(self.config.tolerance, self.config.max_iterations);

        let rate = Self::brent_phase(&points, &initial, &solver_config)
            .or_else(|| Self::bisection_phase(&points, &solver_config))
            .unwrap_or(f64::NAN);
        Ok(rate)
    }

    /// Fast phase: bracket search from the configured interval, then Brent.
    fn brent_phase(
        points: &[NormalizedPoint],
        initial: &Bracket,
        config: &SolverConfig,
    ) -> Option<f64> {
        let f = |rate: f64| npv(points, rate);
        let bracket = find_bracket(&f, initial, config.max_iterations)?;

        match brent(f, bracket.low(), bracket.high(), config) {
            Ok(result) => Some(result.root),
            Err(err) => {
                debug!("Brent phase failed, falling back to bisection: {err}");
                None
            }
        }
    }

    /// Fallback phase: re-bracket from the wider fallback interval, then
    /// bisect.
    fn bisection_phase(points: &[NormalizedPoint], config: &SolverConfig) -> Option<f64> {
        let f = |rate: f64| npv(points, rate);
        let fallback = Bracket::new(FALLBACK_BRACKET_LOW, FALLBACK_BRACKET_HIGH).ok()?;
        let bracket = find_bracket(&f, &fallback, config.max_iterations)?;

        match bisection(f, bracket.low(), bracket.high(), config) {
            Ok(result) => Some(result.root),
            Err(err) => {
                debug!("Bisection phase failed: {err}");
                None
            }
        }
    }
}
