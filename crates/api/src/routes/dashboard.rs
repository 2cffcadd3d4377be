//! Dashboard route.

use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use fintrack_core::dashboard::DashboardService;
use serde::Deserialize;
use tracing::debug;

use super::{ApiResponse, optional_range};
use crate::AppState;
use crate::error::ApiResult;
use crate::extract::ApiQuery;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// Query parameters for the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Range start (YYYY-MM-DD).
    pub start: Option<NaiveDate>,
    /// Range end (YYYY-MM-DD).
    pub end: Option<NaiveDate>,
}

/// GET `/api/dashboard` - Headline figures, optionally for a date range.
async fn get_dashboard(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let range = optional_range(params.start, params.end)?;

    let ledger = state.ledger.read().await;
    let budget = state.budget.read().await;
    let summary = DashboardService::build(ledger.iter(), &budget, range, &state.dashboard)?;
    debug!(balance = %summary.balance.amount, "Built dashboard");

    Ok(ApiResponse::ok(summary))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_support::{demo_app, get};

    #[tokio::test]
    async fn test_dashboard_for_may() {
        let (status, body) = get(demo_app(), "/api/dashboard?start=2025-05-01&end=2025-05-31").await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["balance"]["amount"], "30350");
        assert_eq!(data["balance"]["formatted"], "₹30,350");
        assert_eq!(data["income"]["abbreviated"], "₹57.00K");
        assert_eq!(data["savings"]["amount"], "9105.00");
        assert_eq!(data["recentTransactions"].as_array().unwrap().len(), 5);
        assert_eq!(data["recentTransactions"][0]["description"], "Grocery Shopping");
        assert_eq!(data["budgets"][1]["category"], "food");
        assert_eq!(data["budgets"][1]["status"], "On Track");
    }

    #[tokio::test]
    async fn test_dashboard_rejects_inverted_range() {
        let (status, body) = get(demo_app(), "/api/dashboard?start=2025-06-01&end=2025-05-01").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
