//! Dashboard assembly.

use std::cmp::Reverse;

use rust_decimal::Decimal;

use super::types::{DashboardSettings, DashboardSummary, MoneyFigure};
use crate::aggregation::{
    AggregationError, CategoryBasis, DateRange, filter_by_date_range, spend_by_category,
    summarize_transactions,
};
use crate::budget::BudgetPlan;
use crate::currency::round_half_away;
use crate::transaction::Transaction;

/// Service for building the dashboard.
pub struct DashboardService;

impl DashboardService {
    /// Builds the dashboard over `range`, or over everything when `range`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the range start is after its end.
    pub fn build<'a, I>(
        transactions: I,
        budget: &BudgetPlan,
        range: Option<DateRange>,
        settings: &DashboardSettings,
    ) -> Result<DashboardSummary, AggregationError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let rows: Vec<&Transaction> = match &range {
            Some(range) => filter_by_date_range(transactions, range)?,
            None => transactions.into_iter().collect(),
        };

        let summary = summarize_transactions(rows.iter().copied(), CategoryBasis::Net);
        let savings = Self::savings(summary.net_amount, settings.savings_rate);
        let budgets = budget.variance(&spend_by_category(rows.iter().copied()));

        Ok(DashboardSummary {
            range,
            balance: MoneyFigure::new(summary.net_amount),
            income: MoneyFigure::new(summary.total_income),
            expenses: MoneyFigure::new(summary.total_expenses),
            savings: MoneyFigure::new(savings),
            recent_transactions: Self::recent(&rows, settings.recent_limit),
            budgets,
        })
    }

    /// `balance * rate` to the paisa; zero when the balance is negative.
    /// Saturates instead of overflowing for an extreme rate.
    #[must_use]
    pub fn savings(balance: Decimal, rate: Decimal) -> Decimal {
        round_half_away(balance.max(Decimal::ZERO).saturating_mul(rate), 2)
    }

    /// The `limit` newest transactions. Same-day rows keep source order.
    fn recent(rows: &[&Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted = rows.to_vec();
        sorted.sort_by_key(|t| Reverse(t.date));
        sorted.into_iter().take(limit).cloned().collect()
    }
}
