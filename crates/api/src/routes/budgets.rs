//! Budget routes.

use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use fintrack_core::aggregation::{CategoryBasis, summarize_range};
use fintrack_core::budget::{BudgetPlan, BudgetPlanInput};
use fintrack_core::dashboard::DashboardService;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApiResponse;
use crate::AppState;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budget", get(get_budget))
        .route("/budget/set", post(set_budget))
        .route("/budget/overview", get(get_overview))
}

/// Budget plan with its allocation figures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlanResponse {
    /// The plan.
    #[serde(flatten)]
    pub plan: BudgetPlan,
    /// Sum of category limits.
    pub total_allocated: Decimal,
    /// Income left after limits and savings goal.
    pub unallocated: Decimal,
}

impl From<BudgetPlan> for BudgetPlanResponse {
    fn from(plan: BudgetPlan) -> Self {
        Self {
            total_allocated: plan.total_allocated(),
            unallocated: plan.unallocated(),
            plan,
        }
    }
}

/// Query parameters for the budget overview.
#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    /// Reference date; defaults to today (UTC).
    pub as_of: Option<NaiveDate>,
}

/// GET `/api/budget` - Current plan.
async fn get_budget(State(state): State<AppState>) -> impl IntoResponse {
    let plan = state.budget.read().await.clone();
    ApiResponse::ok(BudgetPlanResponse::from(plan))
}

/// POST `/api/budget/set` - Replace the plan.
async fn set_budget(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BudgetPlanInput>,
) -> ApiResult<impl IntoResponse> {
    let plan = BudgetPlan::try_from(payload)?;
    info!(
        categories = plan.categories().len(),
        total_allocated = %plan.total_allocated(),
        "Budget plan updated"
    );

    *state.budget.write().await = plan.clone();
    Ok(ApiResponse::ok(BudgetPlanResponse::from(plan)))
}

/// GET `/api/budget/overview` - Plan against spend in its period.
///
/// Current savings are the dashboard savings figure for the plan period.
async fn get_overview(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<OverviewQuery>,
) -> ApiResult<impl IntoResponse> {
    let as_of = params.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let ledger = state.ledger.read().await;
    let plan = state.budget.read().await;

    let period = summarize_range(ledger.iter(), &plan.period(), CategoryBasis::Net)?;
    let current_savings =
        DashboardService::savings(period.net_amount, state.dashboard.savings_rate);
    let overview = plan.overview(ledger.iter(), as_of, current_savings);

    Ok(ApiResponse::ok(overview))
}
