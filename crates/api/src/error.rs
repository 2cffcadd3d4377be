//! HTTP error mapping.
//!
//! Core errors are folded into the shared [`AppError`] taxonomy and
//! rendered as `{ "success": false, "error": message, "code": CODE }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fintrack_core::aggregation::AggregationError;
use fintrack_core::budget::BudgetError;
use fintrack_core::reports::ReportError;
use fintrack_core::transaction::TransactionError;
use fintrack_shared::AppError;
use serde_json::json;
use tracing::{error, warn};

/// Error returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Handler result.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(code = self.0.error_code(), error = %self.0, "Request rejected");
        }

        (
            status,
            Json(json!({
                "success": false,
                "error": self.0.message(),
                "code": self.0.error_code(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<TransactionError> for ApiError {
    fn from(err: TransactionError) -> Self {
        let message = err.to_string();
        Self(match err {
            TransactionError::NotFound(_) => AppError::NotFound(message),
            TransactionError::EmptyDescription
            | TransactionError::NonPositiveAmount(_)
            | TransactionError::AmountTooLarge(_)
            | TransactionError::InvalidAmount(_) => AppError::Validation(message),
        })
    }
}

impl From<AggregationError> for ApiError {
    fn from(err: AggregationError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        let message = err.to_string();
        Self(match err {
            BudgetError::DuplicateCategory(_) => AppError::Conflict(message),
            BudgetError::NegativeLimit { .. }
            | BudgetError::LimitTooLarge { .. }
            | BudgetError::NegativeAmount { .. }
            | BudgetError::AmountTooLarge { .. }
            | BudgetError::InvalidPeriod(_) => AppError::Validation(message),
        })
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::transaction::Category;
    use fintrack_shared::types::TransactionId;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::from(TransactionError::EmptyDescription), StatusCode::BAD_REQUEST)]
    #[case(ApiError::from(TransactionError::NotFound(TransactionId::new())), StatusCode::NOT_FOUND)]
    #[case(ApiError::from(BudgetError::DuplicateCategory(Category::Food)), StatusCode::CONFLICT)]
    #[case(ApiError::from(AppError::Internal("boom".into())), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_status_mapping(#[case] err: ApiError, #[case] expected: StatusCode) {
        assert_eq!(err.into_response().status(), expected);
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = ApiError::validation("Amount is required").into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Amount is required");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}
