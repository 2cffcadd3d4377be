//! Budget error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::aggregation::AggregationError;
use crate::transaction::Category;

/// Budget-related errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// A category appears more than once in one plan.
    #[error("Category {0} is budgeted more than once")]
    DuplicateCategory(Category),

    /// Limit cannot be negative.
    #[error("Budget limit for {category} cannot be negative, got {limit}")]
    NegativeLimit {
        /// Category being budgeted.
        category: Category,
        /// Rejected limit.
        limit: Decimal,
    },

    /// Limit is above the accepted maximum.
    #[error("Budget limit for {category} exceeds the maximum, got {limit}")]
    LimitTooLarge {
        /// Category being budgeted.
        category: Category,
        /// Rejected limit.
        limit: Decimal,
    },

    /// Income or savings goal is above the accepted maximum.
    #[error("{field} exceeds the maximum, got {value}")]
    AmountTooLarge {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// Income or savings goal cannot be negative.
    #[error("{field} cannot be negative, got {value}")]
    NegativeAmount {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// Plan period is not a valid date range.
    #[error("Invalid budget period: {0}")]
    InvalidPeriod(#[from] AggregationError),
}
