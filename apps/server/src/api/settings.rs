use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::settings::{Settings, SettingsUpdate};

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    Ok(Json(state.settings_service.get_settings()?))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> ApiResult<Json<Settings>> {
    Ok(Json(state.settings_service.update_settings(update).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
