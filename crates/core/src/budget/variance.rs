//! Budget versus actual variance.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{BudgetCategory, BudgetStanding, BudgetStatus, BudgetVarianceLine, VarianceTotals};
use crate::transaction::Category;

/// `part / whole * 100`, guarded against a zero denominator.
///
/// `0 / 0` is `Some(0)`. Anything else over zero is undefined and yields
/// `None`, as does a ratio too large to represent.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return part.is_zero().then_some(Decimal::ZERO);
    }
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Compares budget limits with actual spend per category.
///
/// One line per budget entry, in budget order, followed by one
/// `Unbudgeted` line per category that has spend but no budget, in
/// category order. Budgeted categories without spend get `actual = 0`.
#[must_use]
pub fn compute_budget_variance(
    budget_categories: &[BudgetCategory],
    actual_by_category: &BTreeMap<Category, Decimal>,
) -> Vec<BudgetVarianceLine> {
    let mut lines: Vec<BudgetVarianceLine> = budget_categories
        .iter()
        .map(|entry| {
            let actual = actual_by_category
                .get(&entry.category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let percent_used = percent_of(actual, entry.limit);
            BudgetVarianceLine {
                category: entry.category,
                budget: Some(entry.limit),
                actual,
                remaining: entry.limit - actual,
                percent_used,
                status: BudgetStatus::from_percent(percent_used),
            }
        })
        .collect();

    let unbudgeted = actual_by_category
        .iter()
        .filter(|(category, _)| !budget_categories.iter().any(|b| b.category == **category))
        .map(|(&category, &actual)| BudgetVarianceLine {
            category,
            budget: None,
            actual,
            remaining: -actual,
            percent_used: None,
            status: BudgetStatus::Unbudgeted,
        });
    lines.extend(unbudgeted);

    lines
}

/// Rolls variance lines up into plan-level totals.
///
/// Undefined per-line percentages are left out of the average.
#[must_use]
pub fn summarize_variance(lines: &[BudgetVarianceLine]) -> VarianceTotals {
    let mut total_budget = Decimal::ZERO;
    let mut total_actual = Decimal::ZERO;
    let mut unbudgeted_actual = Decimal::ZERO;
    let mut percent_sum = Some(Decimal::ZERO);
    let mut percent_count = 0u32;

    for line in lines {
        match line.budget {
            Some(budget) => {
                total_budget += budget;
                total_actual += line.actual;
                if let Some(percent) = line.percent_used {
                    percent_sum = percent_sum.and_then(|sum| sum.checked_add(percent));
                    percent_count += 1;
                }
            }
            None => unbudgeted_actual += line.actual,
        }
    }

    let remaining = total_budget - total_actual;
    let standing = if remaining > Decimal::ZERO {
        BudgetStanding::UnderBudget
    } else if remaining < Decimal::ZERO {
        BudgetStanding::OverBudget
    } else {
        BudgetStanding::OnBudget
    };
    let average_percent_used = percent_sum
        .filter(|_| percent_count > 0)
        .map(|sum| sum / Decimal::from(percent_count));

    VarianceTotals {
        total_budget,
        total_actual,
        remaining,
        unbudgeted_actual,
        utilization_percent: percent_of(total_actual, total_budget),
        average_percent_used,
        standing,
        variance_percent: percent_of(remaining.abs(), total_budget),
    }
}
