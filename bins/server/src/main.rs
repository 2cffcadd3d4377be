//! FinTrack API Server
//!
//! Main entry point for the FinTrack backend service.

use anyhow::Context;
use chrono::{Datelike, Utc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fintrack_api::{AppState, create_router};
use fintrack_core::aggregation::DateRange;
use fintrack_core::budget::BudgetPlan;
use fintrack_core::seed::{demo_budget, demo_transactions};
use fintrack_core::transaction::TransactionLedger;
use fintrack_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Build the in-memory ledger and budget plan
    let (ledger, budget) = if config.finance.seed_demo_data {
        let ledger = TransactionLedger::from_transactions(demo_transactions());
        let budget = demo_budget().context("Demo budget is invalid")?;
        info!(transactions = ledger.len(), "Seeded demo data");
        (ledger, budget)
    } else {
        let today = Utc::now().date_naive();
        let period = DateRange::month(today.year(), today.month())?;
        (TransactionLedger::new(), BudgetPlan::new(period, Vec::new())?)
    };

    let state = AppState::new(ledger, budget, &config.finance);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
