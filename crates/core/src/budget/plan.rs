//! Budget plans and the budget overview.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::BudgetError;
use super::types::{BudgetCategory, BudgetStatus, BudgetVarianceLine, VarianceTotals};
use super::variance::{compute_budget_variance, percent_of, summarize_variance};
use crate::aggregation::{DateRange, filter_by_date_range, spend_by_category};
use crate::transaction::{Category, MAX_AMOUNT, Transaction};

/// Number of categories listed in [`BudgetOverview::top_spending`].
pub const TOP_SPENDING_LIMIT: usize = 5;

/// Per-category limits for one period, with income and a savings goal.
///
/// Holds at most one limit per category and no negative amounts.
/// Deserializing runs the same checks as [`BudgetPlan::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BudgetPlanInput")]
pub struct BudgetPlan {
    period: DateRange,
    categories: Vec<BudgetCategory>,
    monthly_income: Decimal,
    savings_goal: Decimal,
}

/// Unvalidated budget plan, as submitted by a client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlanInput {
    /// Plan period.
    pub period: DateRange,
    /// Category limits.
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
    /// Expected income for the period.
    #[serde(default)]
    pub monthly_income: Decimal,
    /// Amount to set aside.
    #[serde(default)]
    pub savings_goal: Decimal,
}

impl TryFrom<BudgetPlanInput> for BudgetPlan {
    type Error = BudgetError;

    fn try_from(input: BudgetPlanInput) -> Result<Self, Self::Error> {
        let mut plan = Self::new(input.period, input.categories)?;
        plan.set_monthly_income(input.monthly_income)?;
        plan.set_savings_goal(input.savings_goal)?;
        Ok(plan)
    }
}

impl BudgetPlan {
    /// Creates a plan with zero income and no savings goal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` for an inverted period, `NegativeLimit` or
    /// `LimitTooLarge` for a limit outside `0..=MAX_AMOUNT` and
    /// `DuplicateCategory` if a category repeats.
    pub fn new(period: DateRange, categories: Vec<BudgetCategory>) -> Result<Self, BudgetError> {
        period.validate()?;
        let mut plan = Self {
            period,
            categories: Vec::with_capacity(categories.len()),
            monthly_income: Decimal::ZERO,
            savings_goal: Decimal::ZERO,
        };
        for entry in categories {
            if plan.limit_for(entry.category).is_some() {
                return Err(BudgetError::DuplicateCategory(entry.category));
            }
            plan.set_limit(entry.category, entry.limit)?;
        }
        Ok(plan)
    }

    /// Period the plan covers.
    #[must_use]
    pub const fn period(&self) -> DateRange {
        self.period
    }

    /// Limits in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    /// Expected income for the period.
    #[must_use]
    pub const fn monthly_income(&self) -> Decimal {
        self.monthly_income
    }

    /// Savings target for the period.
    #[must_use]
    pub const fn savings_goal(&self) -> Decimal {
        self.savings_goal
    }

    /// Sets the expected income.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` or `AmountTooLarge` outside `0..=MAX_AMOUNT`.
    pub fn set_monthly_income(&mut self, income: Decimal) -> Result<(), BudgetError> {
        self.monthly_income = non_negative("monthly income", income)?;
        Ok(())
    }

    /// Sets the savings goal.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` or `AmountTooLarge` outside `0..=MAX_AMOUNT`.
    pub fn set_savings_goal(&mut self, goal: Decimal) -> Result<(), BudgetError> {
        self.savings_goal = non_negative("savings goal", goal)?;
        Ok(())
    }

    /// Inserts or replaces the limit for `category`.
    ///
    /// A replaced limit keeps its position.
    ///
    /// # Errors
    ///
    /// Returns `NegativeLimit` if `limit < 0` and `LimitTooLarge` above
    /// [`MAX_AMOUNT`].
    pub fn set_limit(&mut self, category: Category, limit: Decimal) -> Result<(), BudgetError> {
        if limit < Decimal::ZERO {
            return Err(BudgetError::NegativeLimit { category, limit });
        }
        if limit > MAX_AMOUNT {
            return Err(BudgetError::LimitTooLarge { category, limit });
        }
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.limit = limit,
            None => self.categories.push(BudgetCategory::new(category, limit)),
        }
        Ok(())
    }

    /// Removes the limit for `category`, returning it if present.
    pub fn remove(&mut self, category: Category) -> Option<BudgetCategory> {
        let position = self.categories.iter().position(|c| c.category == category)?;
        Some(self.categories.remove(position))
    }

    /// Limit for `category`, if budgeted.
    #[must_use]
    pub fn limit_for(&self, category: Category) -> Option<Decimal> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.limit)
    }

    /// Sum of all limits.
    #[must_use]
    pub fn total_allocated(&self) -> Decimal {
        self.categories.iter().map(|c| c.limit).sum()
    }

    /// Income left after limits and the savings goal. Negative when the
    /// plan is over-allocated.
    #[must_use]
    pub fn unallocated(&self) -> Decimal {
        self.monthly_income - self.total_allocated() - self.savings_goal
    }

    /// Variance of this plan against per-category spend.
    #[must_use]
    pub fn variance(&self, actual_by_category: &BTreeMap<Category, Decimal>) -> Vec<BudgetVarianceLine> {
        compute_budget_variance(&self.categories, actual_by_category)
    }

    /// Builds the budget overview for the plan period as of `as_of`.
    ///
    /// Only outflows dated inside the period count as spend.
    #[must_use]
    pub fn overview<'a, I>(
        &self,
        transactions: I,
        as_of: NaiveDate,
        current_savings: Decimal,
    ) -> BudgetOverview
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        // The period was validated on construction, so filtering cannot fail.
        let in_period: Vec<&Transaction> = filter_by_date_range(transactions, &self.period)
            .unwrap_or_default();
        let spend = spend_by_category(in_period);

        let categories = self.variance(&spend);
        let totals = summarize_variance(&categories);

        let mut top_spending: Vec<CategorySpend> = spend
            .iter()
            .filter(|(_, amount)| **amount > Decimal::ZERO)
            .map(|(&category, &amount)| CategorySpend { category, amount })
            .collect();
        top_spending.sort_by(|a, b| b.amount.cmp(&a.amount));
        top_spending.truncate(TOP_SPENDING_LIMIT);

        let days_remaining = self.days_remaining(as_of);
        let daily_remaining = (days_remaining > 0).then(|| {
            (totals.remaining.max(Decimal::ZERO) / Decimal::from(days_remaining))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        });

        BudgetOverview {
            period: self.period,
            status: BudgetStatus::from_percent(totals.utilization_percent),
            savings: SavingsProgress {
                goal: self.savings_goal,
                current: current_savings,
                percent: percent_of(current_savings, self.savings_goal),
            },
            totals,
            categories,
            top_spending,
            days_remaining,
            daily_remaining,
        }
    }

    /// Days left in the period counting `as_of`; zero once it has ended.
    fn days_remaining(&self, as_of: NaiveDate) -> i64 {
        if as_of > self.period.end {
            0
        } else if as_of < self.period.start {
            self.period.days()
        } else {
            (self.period.end - as_of).num_days() + 1
        }
    }
}

fn non_negative(field: &'static str, value: Decimal) -> Result<Decimal, BudgetError> {
    if value < Decimal::ZERO {
        return Err(BudgetError::NegativeAmount { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(BudgetError::AmountTooLarge { field, value });
    }
    Ok(value)
}

/// Spend in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    /// Category.
    pub category: Category,
    /// Amount spent.
    pub amount: Decimal,
}

/// Progress toward the savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProgress {
    /// Target.
    pub goal: Decimal,
    /// Saved so far.
    pub current: Decimal,
    /// `current / goal * 100`, `None` with no goal and some savings.
    pub percent: Option<Decimal>,
}

/// Snapshot of a budget plan against spend in its period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    /// Plan period.
    pub period: DateRange,
    /// Plan-level totals.
    pub totals: VarianceTotals,
    /// Overall status from total utilization.
    pub status: BudgetStatus,
    /// Per-category lines.
    pub categories: Vec<BudgetVarianceLine>,
    /// Highest spending categories, largest first.
    pub top_spending: Vec<CategorySpend>,
    /// Days left in the period counting today.
    pub days_remaining: i64,
    /// Remaining budget per remaining day; `None` once the period ended.
    pub daily_remaining: Option<Decimal>,
    /// Savings goal progress.
    pub savings: SavingsProgress,
}
