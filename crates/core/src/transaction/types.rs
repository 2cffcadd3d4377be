//! Transaction data types.

use std::str::FromStr;

use chrono::NaiveDate;
use fintrack_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::error::TransactionError;

/// Largest magnitude accepted for an entered amount or budget figure
/// (10^15). Keeps totals and percentages well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A single dated, categorized, signed monetary movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Stable identifier.
    pub id: TransactionId,
    /// Calendar date of the movement.
    pub date: NaiveDate,
    /// Free-text label.
    pub description: String,
    /// Signed amount: positive is inflow, negative is outflow.
    pub amount: Decimal,
    /// Classification.
    pub category: Category,
}

impl Transaction {
    /// Creates a transaction with a fresh ID.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: Category,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            amount,
            category,
        }
    }

    /// Returns true for inflows.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true for outflows.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// Direction of a transaction entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money in.
    Income,
    /// Money out.
    Expense,
}

/// Input for recording a transaction.
///
/// The amount is entered as a positive magnitude; `kind` decides its sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// Free-text label.
    pub description: String,
    /// Positive magnitude. Accepts a JSON number or numeric text.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Calendar date.
    pub date: NaiveDate,
    /// Classification.
    pub category: Category,
}

impl NewTransaction {
    /// Validates the input and returns the signed amount to store.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDescription` for a blank description,
    /// `NonPositiveAmount` unless the amount is strictly positive and
    /// `AmountTooLarge` above [`MAX_AMOUNT`].
    pub fn signed_amount(&self) -> Result<Decimal, TransactionError> {
        if self.description.trim().is_empty() {
            return Err(TransactionError::EmptyDescription);
        }
        if self.amount <= Decimal::ZERO {
            return Err(TransactionError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(TransactionError::AmountTooLarge(self.amount));
        }

        Ok(match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        })
    }
}

/// Parses amount text at the input boundary.
///
/// # Errors
///
/// Returns `InvalidAmount` for text that is not a finite decimal number,
/// including `NaN` and the empty string.
pub fn parse_amount(text: &str) -> Result<Decimal, TransactionError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| TransactionError::InvalidAmount(text.to_string()))
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Number(Decimal),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(text) => parse_amount(&text).map_err(serde::de::Error::custom),
        RawAmount::Number(amount) => Ok(amount),
    }
}
