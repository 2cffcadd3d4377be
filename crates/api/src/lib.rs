//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the transaction ledger and budget plan
//! - JSON success and error envelopes
//! - Shared application state

pub mod error;
pub mod extract;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use axum::Router;
use fintrack_core::budget::BudgetPlan;
use fintrack_core::dashboard::DashboardSettings;
use fintrack_core::transaction::TransactionLedger;
use fintrack_shared::FinanceConfig;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Recorded transactions.
    pub ledger: Arc<RwLock<TransactionLedger>>,
    /// Active budget plan.
    pub budget: Arc<RwLock<BudgetPlan>>,
    /// Dashboard tunables.
    pub dashboard: DashboardSettings,
}

impl AppState {
    /// Creates state around a ledger and a budget plan.
    #[must_use]
    pub fn new(ledger: TransactionLedger, budget: BudgetPlan, finance: &FinanceConfig) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            budget: Arc::new(RwLock::new(budget)),
            dashboard: DashboardSettings {
                savings_rate: finance.savings_rate,
                recent_limit: finance.recent_transactions,
            },
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
