//! # Velox XIRR
//!
//! Annualized internal rate of return for irregularly-dated cash flows.
//!
//! Given a series of `(amount, date)` pairs, the engine finds the single
//! discount rate at which the series' net present value is zero:
//!
//! - **Normalization**: flows are stably sorted and expressed as
//!   `(amount, year_fraction)` pairs relative to the earliest flow
//! - **Bracket search**: a deterministic scan locates a sign change of the
//!   NPV function
//! - **Brent's method** shrinks the bracket superlinearly; **bisection**
//!   takes over when Brent fails
//!
//! "No sensible rate exists" is an expected outcome, not an exception: it
//! is reported as `f64::NAN`. Only a malformed configuration produces an
//! error, rejected before any solver work.
//!
//! ## Usage
//!
//! ```rust
//! use velox_core::Date;
//! use velox_xirr::{xirr, xirr_with_config, XirrConfig};
//!
//! let cashflows = [
//!     (-1000.0, Date::from_ymd(1985, 1, 1).unwrap()),
//!     (600.0, Date::from_ymd(1990, 1, 1).unwrap()),
//!     (6000.0, Date::from_ymd(1995, 1, 1).unwrap()),
//! ];
//!
//! let rate = xirr(&cashflows).unwrap();
//! assert!((rate - 0.2257).abs() < 1e-3);
//!
//! // Same series, looser convergence
//! let config = XirrConfig::default().with_tolerance(1e-4);
//! let loose = xirr_with_config(&cashflows, &config).unwrap();
//! assert!((loose - rate).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod engine;
pub mod error;
pub mod npv;

pub use config::{XirrConfig, DEFAULT_BRACKET_HIGH, DEFAULT_BRACKET_LOW};
pub use engine::XirrEngine;
pub use error::{XirrError, XirrResult};
pub use npv::npv;

use velox_core::Date;

/// Calculates the XIRR of calendar-dated cash flows with defaults.
///
/// Returns the annualized rate, or NaN when no sensible rate exists.
///
/// # Errors
///
/// Never fails with the default configuration; the `Result` mirrors
/// [`XirrEngine::calculate`].
pub fn xirr(cashflows: &[(f64, Date)]) -> XirrResult<f64> {
    XirrEngine::new().calculate(cashflows)
}

/// Calculates the XIRR of calendar-dated cash flows with an explicit
/// configuration.
///
/// # Errors
///
/// Returns `XirrError::InvalidConfig` for a malformed configuration.
pub fn xirr_with_config(cashflows: &[(f64, Date)], config: &XirrConfig) -> XirrResult<f64> {
    XirrEngine::with_config(*config).calculate(cashflows)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{XirrConfig, DEFAULT_BRACKET_HIGH, DEFAULT_BRACKET_LOW};
    pub use crate::engine::XirrEngine;
    pub use crate::error::{XirrError, XirrResult};
    pub use crate::npv::npv;
    pub use crate::{xirr, xirr_with_config};
    pub use velox_core::{CashFlow, CashFlowSeries, Date, NormalizedPoint};
    pub use velox_math::solvers::{Bracket, SolverConfig, SolverResult};
}
