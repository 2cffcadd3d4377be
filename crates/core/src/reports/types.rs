//! Report data types.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::aggregation::{DateRange, ReportSummary};
use crate::budget::{BudgetVarianceLine, VarianceTotals, percent_of};
use crate::transaction::Transaction;

/// Kind of report to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// All transactions in range.
    Transactions,
    /// Inflows only.
    Income,
    /// Outflows only.
    Expenses,
    /// Budget versus actual spend.
    Budget,
}

impl ReportKind {
    /// Report heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Transactions => "Transaction Report",
            Self::Income => "Income Analysis",
            Self::Expenses => "Expense Analysis",
            Self::Budget => "Budget vs Actual",
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Income => "income",
            Self::Expenses => "expenses",
            Self::Budget => "budget",
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transactions" => Ok(Self::Transactions),
            "income" => Ok(Self::Income),
            "expenses" => Ok(Self::Expenses),
            "budget" => Ok(Self::Budget),
            _ => Err(ReportError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Report kind.
    pub kind: ReportKind,
    /// Inclusive date range.
    pub range: DateRange,
}

/// Direction of the net result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfitLossKind {
    /// Income exceeded expenses.
    Profit,
    /// Expenses exceeded income.
    Loss,
    /// Income equals expenses.
    BreakEven,
}

/// Profit or loss for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLoss {
    /// Profit, loss or break-even.
    pub outcome: ProfitLossKind,
    /// Magnitude of the net amount.
    pub amount: Decimal,
    /// `amount / total_expenses * 100`; `None` when there were no expenses
    /// or the ratio is too large to represent.
    pub percent_of_expenses: Option<Decimal>,
}

impl ProfitLoss {
    /// Derives profit or loss from a summary.
    #[must_use]
    pub fn from_summary(summary: &ReportSummary) -> Self {
        let net = summary.net_amount;
        let outcome = if net > Decimal::ZERO {
            ProfitLossKind::Profit
        } else if net < Decimal::ZERO {
            ProfitLossKind::Loss
        } else {
            ProfitLossKind::BreakEven
        };
        let percent_of_expenses = if summary.total_expenses.is_zero() {
            None
        } else {
            percent_of(net.abs(), summary.total_expenses)
        };

        Self {
            outcome,
            amount: net.abs(),
            percent_of_expenses,
        }
    }
}

/// One slice of a category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// Category display name.
    pub name: String,
    /// Amount.
    pub value: Decimal,
}

/// Budget section of a budget report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    /// Per-category variance.
    pub lines: Vec<BudgetVarianceLine>,
    /// Totals and under/over standing.
    pub totals: VarianceTotals,
}

/// A generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Report kind.
    #[serde(rename = "type")]
    pub kind: ReportKind,
    /// Heading.
    pub title: String,
    /// Covered dates.
    pub range: DateRange,
    /// Rows the report is built from.
    pub transactions: Vec<Transaction>,
    /// Totals and category breakdown.
    pub summary: ReportSummary,
    /// Present on transaction reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_loss: Option<ProfitLoss>,
    /// Present on expense reports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chart: Vec<ChartSlice>,
    /// Present on budget reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetReport>,
}
