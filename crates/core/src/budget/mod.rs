//! Budget model and budget-versus-actual variance.
//!
//! A [`BudgetPlan`] holds per-category limits for one period. Variance
//! compares those limits with spend from the aggregation engine. Spend in
//! categories without a limit is reported as `Unbudgeted` rather than
//! dropped.

pub mod error;
pub mod plan;
pub mod types;
pub mod variance;


pub use error::BudgetError;
pub use plan::{
    BudgetOverview, BudgetPlan, BudgetPlanInput, CategorySpend, SavingsProgress,
    TOP_SPENDING_LIMIT,
};
pub use types::{BudgetCategory, BudgetStanding, BudgetStatus, BudgetVarianceLine, VarianceTotals};
pub use variance::{compute_budget_variance, percent_of, summarize_variance};
