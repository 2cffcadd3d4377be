//! Demo fixture data.
//!
//! Served when configuration enables seeding so a fresh server has
//! something to show. The figures are illustrative only.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::aggregation::DateRange;
use crate::budget::{BudgetCategory, BudgetError, BudgetPlan};
use crate::transaction::{Category, Transaction};

const DEMO_ROWS: [(i32, u32, u32, &str, i64, Category); 12] = [
    (2025, 5, 18, "Salary", 45_000, Category::Income),
    (2025, 5, 10, "Rent Payment", -15_000, Category::Housing),
    (2025, 5, 21, "Grocery Shopping", -2_450, Category::Food),
    (2025, 5, 16, "Restaurant Bill", -1_200, Category::Food),
    (2025, 5, 14, "Petrol", -1_500, Category::Transport),
    (2025, 5, 8, "Movie Tickets", -800, Category::Entertainment),
    (2025, 5, 5, "Electricity Bill", -2_200, Category::Utilities),
    (2025, 5, 3, "Freelance Work", 12_000, Category::Income),
    (2025, 5, 1, "Online Shopping", -3_500, Category::Shopping),
    (2025, 4, 28, "Mobile Recharge", -499, Category::Utilities),
    (2025, 4, 25, "Gym Membership", -1_800, Category::Other),
    (2025, 4, 22, "Birthday Gift", -1_000, Category::Other),
];

const DEMO_LIMITS: [(Category, i64); 4] = [
    (Category::Housing, 20_000),
    (Category::Food, 8_000),
    (Category::Transport, 5_000),
    (Category::Entertainment, 5_000),
];

/// The twelve demo transactions spanning late April and May 2025.
#[must_use]
pub fn demo_transactions() -> Vec<Transaction> {
    DEMO_ROWS
        .iter()
        .filter_map(|&(year, month, day, description, amount, category)| {
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(Transaction::new(
                date,
                description,
                Decimal::from(amount),
                category,
            ))
        })
        .collect()
}

/// Demo budget plan for May 2025.
///
/// # Errors
///
/// Returns a `BudgetError` only if the fixture itself is inconsistent.
pub fn demo_budget() -> Result<BudgetPlan, BudgetError> {
    let period = DateRange::month(2025, 5)?;
    let categories = DEMO_LIMITS
        .iter()
        .map(|&(category, limit)| BudgetCategory::new(category, Decimal::from(limit)))
        .collect();

    let mut plan = BudgetPlan::new(period, categories)?;
    plan.set_monthly_income(Decimal::from(57_000))?;
    plan.set_savings_goal(Decimal::from(10_000))?;
    Ok(plan)
}
