//! Aggregation engine.
//!
//! Pure functions over any iterator of transactions: date filtering,
//! totals and per-category grouping. The dashboard, budget and report
//! views all summarize through here so their numbers agree.

mod error;
mod range;
mod summary;


pub use error::AggregationError;
pub use range::DateRange;
pub use summary::{
    CategoryBasis, ReportSummary, filter_by_date_range, spend_by_category, summarize_range,
    summarize_transactions,
};
