//! Transactions, categories and the in-memory ledger.
//!
//! A transaction's sign carries its direction: positive amounts are
//! inflows, negative amounts are outflows. Entry forms take a positive
//! magnitude plus a [`TransactionKind`] and the ledger applies the sign.

mod category;
mod error;
mod ledger;
mod query;
mod types;

pub use category::Category;
pub use error::TransactionError;
pub use ledger::{TransactionLedger, TransactionSource};
pub use query::TransactionQuery;
pub use types::{MAX_AMOUNT, NewTransaction, Transaction, TransactionKind, parse_amount};
