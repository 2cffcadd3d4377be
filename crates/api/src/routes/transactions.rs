//! Transaction routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use fintrack_core::transaction::{Category, NewTransaction, TransactionQuery};
use fintrack_shared::types::{PageRequest, TransactionId};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::{ApiResponse, optional_range};
use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiQuery};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/add", post(add_transaction))
        .route("/transactions/{id}", delete(delete_transaction))
}

/// Query parameters for listing transactions.
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    /// Case-insensitive description search.
    pub search: Option<String>,
    /// Category filter; `all` or absent means no filter.
    pub category: Option<String>,
    /// Range start (YYYY-MM-DD).
    pub start: Option<NaiveDate>,
    /// Range end (YYYY-MM-DD).
    pub end: Option<NaiveDate>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size (default 10, max 100).
    pub per_page: Option<u32>,
}

impl ListTransactionsQuery {
    fn to_query(&self) -> ApiResult<TransactionQuery> {
        let mut query = TransactionQuery::new();
        if let Some(term) = &self.search {
            query = query.with_search(term.as_str());
        }
        if let Some(label) = self.category.as_deref().map(str::trim)
            && !label.is_empty()
            && !label.eq_ignore_ascii_case("all")
        {
            let category = Category::parse_known(label)
                .ok_or_else(|| ApiError::validation(format!("Unknown category: {label}")))?;
            query = query.with_category(category);
        }
        if let Some(range) = optional_range(self.start, self.end)? {
            query = query.with_range(range);
        }
        Ok(query)
    }

    fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.per_page.unwrap_or(defaults.per_page),
        )
    }
}

/// GET `/api/transactions` - List transactions, filtered and paginated.
async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListTransactionsQuery>,
) -> ApiResult<impl IntoResponse> {
    let query = params.to_query()?;
    let page = params.page_request();

    let ledger = state.ledger.read().await;
    let result = query.page(&*ledger, page);
    debug!(
        total = result.meta.total,
        page = result.meta.page,
        "Listed transactions"
    );

    Ok(Json(json!({
        "success": true,
        "data": result.data,
        "meta": result.meta,
    })))
}

/// POST `/api/transactions/add` - Record a transaction.
async fn add_transaction(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewTransaction>,
) -> ApiResult<impl IntoResponse> {
    let stored = state.ledger.write().await.record(payload)?;
    info!(
        transaction_id = %stored.id,
        amount = %stored.amount,
        category = %stored.category,
        "Transaction recorded"
    );

    Ok((StatusCode::CREATED, ApiResponse::ok(stored)))
}

/// DELETE `/api/transactions/{id}` - Delete a transaction.
async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: TransactionId = id
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid transaction id: {id}")))?;

    let removed = state.ledger.write().await.delete(id)?;
    info!(transaction_id = %removed.id, "Transaction deleted");

    Ok(ApiResponse::ok(removed))
}
