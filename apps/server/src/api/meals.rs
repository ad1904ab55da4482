use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::meals::{
    DayNutritionSummary, Meal, MealPlanEntry, MealUpdate, NewMeal, NewMealPlanEntry,
    SchedulePattern, WeeklyCalorieSchedule,
};

async fn list_meals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Meal>>> {
    Ok(Json(state.meal_service.list_meals()?))
}

async fn get_meal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Meal>> {
    Ok(Json(state.meal_service.get_meal(&id)?))
}

async fn create_meal(
    State(state): State<Arc<AppState>>,
    Json(meal): Json<NewMeal>,
) -> ApiResult<Json<Meal>> {
    Ok(Json(state.meal_service.create_meal(meal).await?))
}

async fn update_meal(
    State(state): State<Arc<AppState>>,
    Json(meal): Json<MealUpdate>,
) -> ApiResult<Json<Meal>> {
    Ok(Json(state.meal_service.update_meal(meal).await?))
}

async fn delete_meal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.meal_service.delete_meal(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn schedule_meal(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<NewMealPlanEntry>,
) -> ApiResult<Json<MealPlanEntry>> {
    Ok(Json(state.meal_service.schedule_meal(entry).await?))
}

async fn unschedule_meal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.meal_service.unschedule_meal(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleBody {
    week_start: NaiveDate,
    weekly_target: i32,
    #[serde(default)]
    pattern: SchedulePattern,
}

async fn weekly_schedule(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ScheduleBody>,
) -> ApiResult<Json<WeeklyCalorieSchedule>> {
    Ok(Json(state.meal_service.weekly_schedule(
        body.week_start,
        body.weekly_target,
        body.pattern,
    )?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NutritionParams {
    week_start: NaiveDate,
    weekly_target: i32,
    #[serde(default)]
    pattern: SchedulePattern,
}

async fn week_nutrition(
    Query(params): Query<NutritionParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DayNutritionSummary>>> {
    Ok(Json(state.meal_service.week_nutrition(
        params.week_start,
        params.weekly_target,
        params.pattern,
    )?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meals/schedule", post(weekly_schedule))
        .route("/meals/nutrition", get(week_nutrition))
        .route("/meals/plan", post(schedule_meal))
        .route("/meals/plan/{id}", delete(unschedule_meal))
        .route("/meals", get(list_meals).post(create_meal).put(update_meal))
        .route("/meals/{id}", get(get_meal).delete(delete_meal))
}
