//! Router test helpers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use fintrack_core::seed::{demo_budget, demo_transactions};
use fintrack_core::transaction::TransactionLedger;
use fintrack_shared::FinanceConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// State seeded with the demo ledger and budget.
pub fn demo_state() -> AppState {
    AppState::new(
        TransactionLedger::from_transactions(demo_transactions()),
        demo_budget().unwrap(),
        &FinanceConfig::default(),
    )
}

/// Router over [`demo_state`].
pub fn demo_app() -> Router {
    create_router(demo_state())
}

/// Sends one request and decodes the JSON body (`Null` if not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// GET `uri`.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// Sends `body` as JSON with the given method.
pub async fn send_json(app: Router, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
