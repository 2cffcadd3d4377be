//! Transaction error types.

use fintrack_shared::types::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while recording or looking up transactions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// Description is blank.
    #[error("Description is required")]
    EmptyDescription,

    /// Entered amount must be a positive magnitude.
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// Entered amount is above the accepted maximum.
    #[error("Amount {0} exceeds the maximum of 1000000000000000")]
    AmountTooLarge(Decimal),

    /// Amount text is not a number.
    #[error("Invalid amount: {0:?} is not a number")]
    InvalidAmount(String),

    /// No transaction with this ID.
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),
}
