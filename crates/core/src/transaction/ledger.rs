//! In-memory transaction ledger and the source abstraction the engine reads.

use fintrack_shared::types::TransactionId;
use serde::{Deserialize, Serialize};

use super::error::TransactionError;
use super::types::{NewTransaction, Transaction};

/// Any enumerable source of transactions.
///
/// The aggregation engine only ever reads through this trait, so it works
/// the same over a slice, a `Vec`, or a [`TransactionLedger`].
pub trait TransactionSource {
    /// Iterates the transactions in their stored order.
    fn transactions(&self) -> impl Iterator<Item = &Transaction>;
}

impl TransactionSource for [Transaction] {
    fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.iter()
    }
}

impl TransactionSource for Vec<Transaction> {
    fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.iter()
    }
}

/// Ordered, in-memory collection of transactions.
///
/// Insertion order is preserved. Records are immutable once stored; the
/// only way to change the ledger is to record or delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLedger {
    entries: Vec<Transaction>,
}

impl TransactionLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger holding the given transactions in order.
    #[must_use]
    pub fn from_transactions(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }

    /// Validates and stores a new transaction, returning the stored record.
    ///
    /// # Errors
    ///
    /// Propagates validation failures from [`NewTransaction::signed_amount`].
    pub fn record(&mut self, input: NewTransaction) -> Result<Transaction, TransactionError> {
        let amount = input.signed_amount()?;
        let transaction = Transaction::new(
            input.date,
            input.description.trim(),
            amount,
            input.category,
        );
        self.entries.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes a transaction by ID and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this ID.
    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction, TransactionError> {
        let position = self
            .entries
            .iter()
            .position(|t| t.id == id)
            .ok_or(TransactionError::NotFound(id))?;
        Ok(self.entries.remove(position))
    }

    /// Looks up a transaction by ID.
    #[must_use]
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.iter().find(|t| t.id == id)
    }

    /// Number of stored transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates stored transactions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }

    /// Stored transactions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Transaction] {
        &self.entries
    }
}

impl TransactionSource for TransactionLedger {
    fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{Category, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn grocery() -> NewTransaction {
        NewTransaction {
            description: "  Grocery Shopping ".to_string(),
            amount: dec!(2450),
            kind: TransactionKind::Expense,
            date: NaiveDate::from_ymd_opt(2025, 5, 21).unwrap(),
            category: Category::Food,
        }
    }

    #[test]
    fn test_record_assigns_id_and_sign() {
        let mut ledger = TransactionLedger::new();
        let stored = ledger.record(grocery()).unwrap();

        assert_eq!(stored.amount, dec!(-2450));
        assert_eq!(stored.description, "Grocery Shopping");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(stored.id), Some(&stored));
    }

    #[test]
    fn test_record_rejects_invalid_input() {
        let mut ledger = TransactionLedger::new();
        let mut bad = grocery();
        bad.amount = dec!(0);

        assert!(ledger.record(bad).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_rejects_amount_above_maximum() {
        let mut ledger = TransactionLedger::new();
        let mut huge = grocery();
        huge.amount = Decimal::MAX;

        assert_eq!(
            ledger.record(huge),
            Err(TransactionError::AmountTooLarge(Decimal::MAX))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_delete_preserves_order_of_remaining() {
        let mut ledger = TransactionLedger::new();
        let first = ledger.record(grocery()).unwrap();
        let second = ledger.record(grocery()).unwrap();
        let third = ledger.record(grocery()).unwrap();

        let removed = ledger.delete(second.id).unwrap();

        assert_eq!(removed.id, second.id);
        let ids: Vec<_> = ledger.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut ledger = TransactionLedger::new();
        let id = TransactionId::new();
        assert_eq!(ledger.delete(id), Err(TransactionError::NotFound(id)));
    }

    #[test]
    fn test_slice_and_vec_are_sources() {
        let ledger = {
            let mut l = TransactionLedger::new();
            l.record(grocery()).unwrap();
            l
        };
        let vec = ledger.as_slice().to_vec();

        assert_eq!(vec.transactions().count(), 1);
        assert_eq!(vec.as_slice().transactions().count(), 1);
    }
}
