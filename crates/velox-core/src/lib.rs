//! # Velox Core
//!
//! Core types for the Velox XIRR engine.
//!
//! This crate provides:
//!
//! - **Dates**: [`types::Date`], the calendar boundary (UTC midnight to
//!   epoch seconds)
//! - **Cash flows**: [`types::CashFlow`] and [`types::CashFlowSeries`]
//! - **Normalization**: conversion of a series to
//!   `(amount, year_fraction)` pairs consumed by the solvers
//!
//! The numeric core never sees a calendar date: all timing reaches it as
//! year fractions relative to the earliest flow in the series.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSeries, Date, NormalizedPoint};
