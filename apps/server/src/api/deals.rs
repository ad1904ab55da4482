use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::deals::{
    NewProviderOffer, ProviderOffer, ProviderOfferUpdate, SwitchRecommendation,
};

async fn list_offers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ProviderOffer>>> {
    Ok(Json(state.deal_service.list_offers()?))
}

async fn get_offer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProviderOffer>> {
    Ok(Json(state.deal_service.get_offer(&id)?))
}

async fn create_offer(
    State(state): State<Arc<AppState>>,
    Json(offer): Json<NewProviderOffer>,
) -> ApiResult<Json<ProviderOffer>> {
    Ok(Json(state.deal_service.create_offer(offer).await?))
}

async fn update_offer(
    State(state): State<Arc<AppState>>,
    Json(offer): Json<ProviderOfferUpdate>,
) -> ApiResult<Json<ProviderOffer>> {
    Ok(Json(state.deal_service.update_offer(offer).await?))
}

async fn delete_offer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.deal_service.delete_offer(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Money-saving switches across active bills and offers.
async fn recommendations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SwitchRecommendation>>> {
    Ok(Json(state.deal_service.recommendations()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/deals/recommendations", get(recommendations))
        .route(
            "/deals/offers",
            get(list_offers).post(create_offer).put(update_offer),
        )
        .route("/deals/offers/{id}", get(get_offer).delete(delete_offer))
}
