use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::accounts::{Account, AccountUpdate, CurrencyTotal, NewAccount};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    is_active: Option<bool>,
}

async fn list_accounts(
    Query(params): Query<ListParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.account_service.list_accounts(params.is_active)?;
    Ok(Json(accounts))
}

async fn get_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Account>> {
    Ok(Json(state.account_service.get_account(&id)?))
}

async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<NewAccount>,
) -> ApiResult<Json<Account>> {
    Ok(Json(state.account_service.create_account(account).await?))
}

async fn update_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<AccountUpdate>,
) -> ApiResult<Json<Account>> {
    Ok(Json(state.account_service.update_account(account).await?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceBody {
    balance: Decimal,
}

async fn update_balance(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<BalanceBody>,
) -> ApiResult<Json<Account>> {
    Ok(Json(
        state
            .account_service
            .update_balance(&id, body.balance)
            .await?,
    ))
}

async fn delete_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.account_service.delete_account(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn balances_by_currency(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CurrencyTotal>>> {
    Ok(Json(state.account_service.balances_by_currency()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts/balances", get(balances_by_currency))
        .route(
            "/accounts",
            get(list_accounts).post(create_account).put(update_account),
        )
        .route("/accounts/{id}", get(get_account).delete(delete_account))
        .route("/accounts/{id}/balance", put(update_balance))
}
