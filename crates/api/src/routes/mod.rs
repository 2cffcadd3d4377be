//! API route definitions.

use axum::{Json, Router};
use chrono::NaiveDate;
use fintrack_core::aggregation::DateRange;
use serde::Serialize;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

pub mod budgets;
pub mod dashboard;
pub mod health;
pub mod reports;
pub mod transactions;

/// Creates the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(transactions::routes())
        .merge(dashboard::routes())
        .merge(budgets::routes())
        .merge(reports::routes())
}

/// Success envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always true.
    pub success: bool,
    /// Payload.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps `data` in a success envelope.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Builds an optional range from `start`/`end` query parameters.
///
/// Both or neither must be given.
pub(crate) fn optional_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ApiResult<Option<DateRange>> {
    match (start, end) {
        (Some(start), Some(end)) => Ok(Some(DateRange::new(start, end)?)),
        (None, None) => Ok(None),
        _ => Err(ApiError::validation(
            "start and end must be provided together",
        )),
    }
}
