//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::DateRange;
use crate::budget::BudgetVarianceLine;
use crate::currency::{format_abbreviated_currency, format_currency};
use crate::transaction::Transaction;

/// Share of the balance counted as savings by default.
pub const DEFAULT_SAVINGS_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Number of recent transactions shown by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Tunables for building the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    /// Fraction of a positive balance reported as savings.
    pub savings_rate: Decimal,
    /// How many recent transactions to list.
    pub recent_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            savings_rate: DEFAULT_SAVINGS_RATE,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// A money amount with its display forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyFigure {
    /// Raw amount.
    pub amount: Decimal,
    /// Full form, e.g. `₹25,850`.
    pub formatted: String,
    /// Compact form, e.g. `₹25.85K`.
    pub abbreviated: String,
}

impl MoneyFigure {
    /// Formats `amount` both ways.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            formatted: format_currency(Some(amount)),
            abbreviated: format_abbreviated_currency(Some(amount), true),
        }
    }
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Dates covered; `None` means all transactions.
    pub range: Option<DateRange>,
    /// Net of income and expenses.
    pub balance: MoneyFigure,
    /// Total inflows.
    pub income: MoneyFigure,
    /// Total outflows, as a magnitude.
    pub expenses: MoneyFigure,
    /// Portion of the balance counted as savings.
    pub savings: MoneyFigure,
    /// Latest transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
    /// Budget usage per category.
    pub budgets: Vec<BudgetVarianceLine>,
}
