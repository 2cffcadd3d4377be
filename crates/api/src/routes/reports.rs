//! Report routes.

use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use fintrack_core::aggregation::DateRange;
use fintrack_core::reports::{ReportKind, ReportRequest, ReportService};
use serde::Deserialize;
use tracing::info;

use super::ApiResponse;
use crate::AppState;
use crate::error::ApiResult;
use crate::extract::ApiQuery;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/generate", get(generate_report))
}

/// Query parameters for report generation.
#[derive(Debug, Deserialize)]
pub struct GenerateReportQuery {
    /// `transactions`, `income`, `expenses` or `budget`.
    #[serde(rename = "type")]
    pub report_type: String,
    /// Range start (YYYY-MM-DD).
    pub start: NaiveDate,
    /// Range end (YYYY-MM-DD).
    pub end: NaiveDate,
}

/// GET `/api/reports/generate` - Generate a report for a date range.
async fn generate_report(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<GenerateReportQuery>,
) -> ApiResult<impl IntoResponse> {
    let kind: ReportKind = params.report_type.parse()?;
    let request = ReportRequest {
        kind,
        range: DateRange {
            start: params.start,
            end: params.end,
        },
    };

    let ledger = state.ledger.read().await;
    let budget = state.budget.read().await;
    let report = ReportService::generate(ledger.iter(), &request, &budget)?;
    info!(
        report_type = %kind,
        rows = report.transactions.len(),
        "Report generated"
    );

    Ok(ApiResponse::ok(report))
}
