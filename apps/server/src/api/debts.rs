use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::debts::{
    Debt, DebtSummary, DebtUpdate, NewDebt, PayoffPlan, PayoffStrategy,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    is_active: Option<bool>,
}

async fn list_debts(
    Query(params): Query<ListParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Debt>>> {
    Ok(Json(state.debt_service.list_debts(params.is_active)?))
}

async fn get_debt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Debt>> {
    Ok(Json(state.debt_service.get_debt(&id)?))
}

async fn create_debt(
    State(state): State<Arc<AppState>>,
    Json(debt): Json<NewDebt>,
) -> ApiResult<Json<Debt>> {
    Ok(Json(state.debt_service.create_debt(debt).await?))
}

async fn update_debt(
    State(state): State<Arc<AppState>>,
    Json(debt): Json<DebtUpdate>,
) -> ApiResult<Json<Debt>> {
    Ok(Json(state.debt_service.update_debt(debt).await?))
}

async fn delete_debt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.debt_service.delete_debt(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn debt_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<DebtSummary>> {
    Ok(Json(state.debt_service.summary()?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayoffPlanBody {
    monthly_budget: Decimal,
    #[serde(default)]
    strategy: PayoffStrategy,
    start_month: Option<NaiveDate>,
}

async fn payoff_plan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PayoffPlanBody>,
) -> ApiResult<Json<PayoffPlan>> {
    let start_month = body.start_month.unwrap_or_else(|| {
        let today = Utc::now().date_naive();
        today.with_day(1).unwrap_or(today)
    });
    Ok(Json(state.debt_service.payoff_plan(
        body.monthly_budget,
        body.strategy,
        start_month,
    )?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debts/summary", get(debt_summary))
        .route("/debts/payoff-plan", post(payoff_plan))
        .route("/debts", get(list_debts).post(create_debt).put(update_debt))
        .route("/debts/{id}", get(get_debt).delete(delete_debt))
}
