use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::toiletries::{
    NewToiletryItem, RestockSuggestion, ToiletryItem, ToiletryItemUpdate,
};

async fn list_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ToiletryItem>>> {
    Ok(Json(state.toiletry_service.list_items()?))
}

async fn get_item(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ToiletryItem>> {
    Ok(Json(state.toiletry_service.get_item(&id)?))
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(item): Json<NewToiletryItem>,
) -> ApiResult<Json<ToiletryItem>> {
    Ok(Json(state.toiletry_service.create_item(item).await?))
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    Json(item): Json<ToiletryItemUpdate>,
) -> ApiResult<Json<ToiletryItem>> {
    Ok(Json(state.toiletry_service.update_item(item).await?))
}

async fn delete_item(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.toiletry_service.delete_item(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuantityBody {
    quantity: Decimal,
}

async fn record_usage(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuantityBody>,
) -> ApiResult<Json<ToiletryItem>> {
    Ok(Json(
        state.toiletry_service.record_usage(&id, body.quantity).await?,
    ))
}

async fn record_restock(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuantityBody>,
) -> ApiResult<Json<ToiletryItem>> {
    Ok(Json(
        state
            .toiletry_service
            .record_restock(&id, body.quantity)
            .await?,
    ))
}

async fn restock_list(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RestockSuggestion>>> {
    let today = Utc::now().date_naive();
    Ok(Json(state.toiletry_service.restock_list(today)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/toiletries/restock-list", get(restock_list))
        .route(
            "/toiletries",
            get(list_items).post(create_item).put(update_item),
        )
        .route("/toiletries/{id}", get(get_item).delete(delete_item))
        .route("/toiletries/{id}/usage", post(record_usage))
        .route("/toiletries/{id}/restock", post(record_restock))
}
