//! Filtering and summarizing transaction sets.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::AggregationError;
use super::range::DateRange;
use crate::transaction::{Category, Transaction};

/// How amounts are grouped into [`ReportSummary::by_category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryBasis {
    /// Signed sum of every amount.
    #[default]
    Net,
    /// Sum of positive amounts only.
    Income,
    /// Sum of the magnitudes of negative amounts only.
    Expenses,
}

/// Totals and per-category breakdown of a transaction set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Number of transactions, zero amounts included.
    pub total_transactions: usize,
    /// Sum of positive amounts.
    pub total_income: Decimal,
    /// Magnitude of the sum of negative amounts.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_amount: Decimal,
    /// Per-category amounts, grouped by the requested basis.
    pub by_category: BTreeMap<Category, Decimal>,
}

/// Keeps transactions dated inside `range`, preserving input order.
///
/// # Errors
///
/// Returns `InvalidRange` if `range.start > range.end`.
pub fn filter_by_date_range<'a, I>(
    transactions: I,
    range: &DateRange,
) -> Result<Vec<&'a Transaction>, AggregationError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    range.validate()?;
    Ok(transactions
        .into_iter()
        .filter(|t| range.contains(t.date))
        .collect())
}

/// Computes totals and a category breakdown.
///
/// Zero amounts are counted but add to neither total. Under the `Income`
/// and `Expenses` bases a category only appears if it has at least one
/// amount of the matching sign.
#[must_use]
pub fn summarize_transactions<'a, I>(transactions: I, basis: CategoryBasis) -> ReportSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summary = ReportSummary::default();

    for transaction in transactions {
        let amount = transaction.amount;
        summary.total_transactions += 1;

        if amount > Decimal::ZERO {
            summary.total_income += amount;
        } else if amount < Decimal::ZERO {
            summary.total_expenses += amount.abs();
        }

        let grouped = match basis {
            CategoryBasis::Net => Some(amount),
            CategoryBasis::Income => (amount > Decimal::ZERO).then_some(amount),
            CategoryBasis::Expenses => (amount < Decimal::ZERO).then(|| amount.abs()),
        };
        if let Some(value) = grouped {
            *summary
                .by_category
                .entry(transaction.category)
                .or_insert(Decimal::ZERO) += value;
        }
    }

    summary.net_amount = summary.total_income - summary.total_expenses;
    summary
}

/// Spending per category: magnitudes of outflows only.
#[must_use]
pub fn spend_by_category<'a, I>(transactions: I) -> BTreeMap<Category, Decimal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    summarize_transactions(transactions, CategoryBasis::Expenses).by_category
}

/// Filters to `range`, then summarizes.
///
/// # Errors
///
/// Returns `InvalidRange` if `range.start > range.end`.
pub fn summarize_range<'a, I>(
    transactions: I,
    range: &DateRange,
    basis: CategoryBasis,
) -> Result<ReportSummary, AggregationError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let in_range = filter_by_date_range(transactions, range)?;
    Ok(summarize_transactions(in_range, basis))
}
