use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::paydays::{PayPeriod, PaydayInfo};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DateParam {
    date: Option<NaiveDate>,
}

async fn next_payday(
    Query(params): Query<DateParam>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PaydayInfo>> {
    let today = params.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(state.payday_service.next_payday_info(today)?))
}

async fn pay_period(
    Query(params): Query<DateParam>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PayPeriod>> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(state.payday_service.pay_period(date)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/paydays/next", get(next_payday))
        .route("/paydays/period", get(pay_period))
}
