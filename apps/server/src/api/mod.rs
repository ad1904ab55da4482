//! HTTP API: one router per feature, mounted under `/api`.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

mod accounts;
mod bills;
mod deals;
mod debts;
mod groceries;
mod investments;
mod meals;
mod paydays;
mod settings;
mod toiletries;
mod transactions;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(accounts::router())
        .merge(transactions::router())
        .merge(bills::router())
        .merge(debts::router())
        .merge(paydays::router())
        .merge(groceries::router())
        .merge(meals::router())
        .merge(toiletries::router())
        .merge(investments::router())
        .merge(deals::router())
        .merge(settings::router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
