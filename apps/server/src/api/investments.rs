use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::investments::{
    Investment, InvestmentSummary, InvestmentUpdate, NewInvestment,
};

async fn list_investments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Investment>>> {
    Ok(Json(state.investment_service.list_investments()?))
}

async fn get_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Investment>> {
    Ok(Json(state.investment_service.get_investment(&id)?))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Json(investment): Json<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    Ok(Json(
        state
            .investment_service
            .create_investment(investment)
            .await?,
    ))
}

async fn update_investment(
    State(state): State<Arc<AppState>>,
    Json(investment): Json<InvestmentUpdate>,
) -> ApiResult<Json<Investment>> {
    Ok(Json(
        state
            .investment_service
            .update_investment(investment)
            .await?,
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceBody {
    price: Decimal,
}

async fn update_price(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<PriceBody>,
) -> ApiResult<Json<Investment>> {
    Ok(Json(
        state.investment_service.update_price(&id, body.price).await?,
    ))
}

async fn delete_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.investment_service.delete_investment(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<InvestmentSummary>> {
    Ok(Json(state.investment_service.summary()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments/summary", get(summary))
        .route(
            "/investments",
            get(list_investments)
                .post(create_investment)
                .put(update_investment),
        )
        .route(
            "/investments/{id}",
            get(get_investment).delete(delete_investment),
        )
        .route("/investments/{id}/price", put(update_price))
}
