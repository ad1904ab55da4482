use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::transactions::{
    ImportSummary, MonthlySummary, NewTransaction, Transaction, TransactionQuery,
    TransactionUpdate,
};

async fn search_transactions(
    Query(query): Query<TransactionQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(state.transaction_service.search_transactions(&query)?))
}

async fn get_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(state.transaction_service.get_transaction(&id)?))
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(transaction): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(
        state
            .transaction_service
            .create_transaction(transaction)
            .await?,
    ))
}

async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Json(transaction): Json<TransactionUpdate>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(
        state
            .transaction_service
            .update_transaction(transaction)
            .await?,
    ))
}

async fn delete_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.transaction_service.delete_transaction(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// CSV statement import; the request body is the raw file content.
async fn import_csv(
    Path(account_id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Json<ImportSummary>> {
    Ok(Json(
        state
            .transaction_service
            .import_csv(&account_id, &body)
            .await?,
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryParams {
    year: i32,
    month: u32,
    account_id: Option<String>,
}

async fn monthly_summary(
    Query(params): Query<SummaryParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlySummary>> {
    Ok(Json(state.transaction_service.monthly_summary(
        params.year,
        params.month,
        params.account_id.as_deref(),
    )?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions/summary", get(monthly_summary))
        .route(
            "/transactions",
            get(search_transactions)
                .post(create_transaction)
                .put(update_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction).delete(delete_transaction),
        )
        .route("/transactions/import/{accountId}", post(import_csv))
}
