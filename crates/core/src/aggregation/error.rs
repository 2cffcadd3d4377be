//! Aggregation error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the aggregation engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AggregationError {
    /// Range start is after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Range start.
        start: NaiveDate,
        /// Range end.
        end: NaiveDate,
    },

    /// Year and month do not name a calendar month.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// Calendar year.
        year: i32,
        /// Month number, expected 1-12.
        month: u32,
    },
}
