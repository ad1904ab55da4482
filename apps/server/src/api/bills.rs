use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::bills::{Bill, BillOccurrence, BillUpdate, NewBill};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    is_active: Option<bool>,
}

async fn list_bills(
    Query(params): Query<ListParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Bill>>> {
    Ok(Json(state.bill_service.list_bills(params.is_active)?))
}

async fn get_bill(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Bill>> {
    Ok(Json(state.bill_service.get_bill(&id)?))
}

async fn create_bill(
    State(state): State<Arc<AppState>>,
    Json(bill): Json<NewBill>,
) -> ApiResult<Json<Bill>> {
    Ok(Json(state.bill_service.create_bill(bill).await?))
}

async fn update_bill(
    State(state): State<Arc<AppState>>,
    Json(bill): Json<BillUpdate>,
) -> ApiResult<Json<Bill>> {
    Ok(Json(state.bill_service.update_bill(bill).await?))
}

async fn delete_bill(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.bill_service.delete_bill(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WindowParams {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

/// Occurrences over a window (default: today through 30 days out),
/// matched against stored transactions.
async fn upcoming_bills(
    Query(params): Query<WindowParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BillOccurrence>>> {
    let today = Utc::now().date_naive();
    let start = params.start.unwrap_or(today - Duration::days(7));
    let end = params.end.unwrap_or(today + Duration::days(30));
    Ok(Json(state.bill_service.upcoming_bills(start, end, today)?))
}

async fn projected_monthly_total(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Decimal>> {
    Ok(Json(state.bill_service.projected_monthly_total()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bills/upcoming", get(upcoming_bills))
        .route("/bills/monthly-total", get(projected_monthly_total))
        .route("/bills", get(list_bills).post(create_bill).put(update_bill))
        .route("/bills/{id}", get(get_bill).delete(delete_bill))
}
