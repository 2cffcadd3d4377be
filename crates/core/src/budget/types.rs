//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::Category;

/// Spending ceiling for one category over a plan period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    /// Category being limited.
    pub category: Category,
    /// Non-negative ceiling.
    pub limit: Decimal,
}

impl BudgetCategory {
    /// Creates a budget entry.
    #[must_use]
    pub const fn new(category: Category, limit: Decimal) -> Self {
        Self { category, limit }
    }
}

/// Usage status of a budget line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Usage at or below 75%.
    #[serde(rename = "On Track")]
    OnTrack,
    /// Usage above 75% and at most 90%.
    Warning,
    /// Usage above 90%, or spend against a zero limit.
    Critical,
    /// Spend in a category with no budget.
    Unbudgeted,
}

impl BudgetStatus {
    /// Classifies a usage percentage.
    ///
    /// Thresholds are strict, so exactly 90 is `Warning` and exactly 75 is
    /// `OnTrack`. An undefined percentage is `Critical`.
    #[must_use]
    pub fn from_percent(percent_used: Option<Decimal>) -> Self {
        let Some(percent) = percent_used else {
            return Self::Critical;
        };
        if percent > Decimal::from(90) {
            Self::Critical
        } else if percent > Decimal::from(75) {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

/// Budget versus actual for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVarianceLine {
    /// Category.
    pub category: Category,
    /// Limit, or `None` for an unbudgeted category.
    pub budget: Option<Decimal>,
    /// Actual spend.
    pub actual: Decimal,
    /// `budget - actual`; may be negative. Unbudgeted lines use a zero
    /// budget.
    pub remaining: Decimal,
    /// `actual / budget * 100` at full precision. `None` when undefined.
    pub percent_used: Option<Decimal>,
    /// Usage status.
    pub status: BudgetStatus,
}

/// Whether spending landed under, over or exactly on budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStanding {
    /// Spent less than budgeted.
    UnderBudget,
    /// Spent more than budgeted.
    OverBudget,
    /// Spent exactly the budget.
    OnBudget,
}

/// Aggregate figures over a set of variance lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceTotals {
    /// Sum of limits over budgeted lines.
    pub total_budget: Decimal,
    /// Actual spend over budgeted lines.
    pub total_actual: Decimal,
    /// `total_budget - total_actual`.
    pub remaining: Decimal,
    /// Spend in categories with no budget.
    pub unbudgeted_actual: Decimal,
    /// `total_actual / total_budget * 100`, `None` when nothing is budgeted.
    pub utilization_percent: Option<Decimal>,
    /// Mean of the defined per-line percentages.
    pub average_percent_used: Option<Decimal>,
    /// Under, over or on budget.
    pub standing: BudgetStanding,
    /// `|remaining| / total_budget * 100`, `None` when nothing is budgeted.
    pub variance_percent: Option<Decimal>,
}
