//! Core domain types.

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlowSeries, NormalizedPoint};
pub use date::Date;
