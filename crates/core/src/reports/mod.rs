//! Report generation.
//!
//! Four report kinds share the aggregation engine:
//! - Transactions: every row in range, with a profit/loss indicator
//! - Income Analysis: inflows grouped by category
//! - Expense Analysis: outflows grouped by category, with chart slices
//! - Budget vs Actual: variance lines against a budget plan

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
