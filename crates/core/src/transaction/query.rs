//! Transaction list filtering.

use fintrack_shared::types::{PageRequest, PageResponse};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ledger::TransactionSource;
use super::types::Transaction;
use crate::aggregation::DateRange;

/// Filter for listing transactions.
///
/// All criteria are optional and combine with AND. An empty query matches
/// every transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<Category>,
    /// Inclusive date range.
    pub range: Option<DateRange>,
}

impl TransactionQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to descriptions containing `term`, ignoring case.
    /// A blank term is ignored.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then_some(term);
        self
    }

    /// Restricts to one category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restricts to an inclusive date range.
    #[must_use]
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Returns true if the transaction satisfies every criterion.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(category) = self.category
            && transaction.category != category
        {
            return false;
        }
        if let Some(range) = &self.range
            && !range.contains(transaction.date)
        {
            return false;
        }
        match &self.search {
            Some(term) => transaction
                .description
                .to_lowercase()
                .contains(&term.trim().to_lowercase()),
            None => true,
        }
    }

    /// Matching transactions in source order.
    pub fn apply<'a, S>(&self, source: &'a S) -> Vec<&'a Transaction>
    where
        S: TransactionSource + ?Sized,
    {
        source.transactions().filter(|t| self.matches(t)).collect()
    }

    /// One page of the matching transactions.
    pub fn page<S>(&self, source: &S, page: PageRequest) -> PageResponse<Transaction>
    where
        S: TransactionSource + ?Sized,
    {
        let matched: Vec<Transaction> = self.apply(source).into_iter().cloned().collect();
        page.paginate(&matched)
    }
}
