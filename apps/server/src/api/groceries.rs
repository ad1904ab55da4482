use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use lifetracker_core::groceries::{
    BasketPricing, DealRule, GroceryProduct, GroceryProductUpdate, NewDealRule,
    NewGroceryProduct, ShoppingRequest,
};

async fn list_products(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GroceryProduct>>> {
    Ok(Json(state.grocery_service.list_products()?))
}

async fn get_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GroceryProduct>> {
    Ok(Json(state.grocery_service.get_product(&id)?))
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(product): Json<NewGroceryProduct>,
) -> ApiResult<Json<GroceryProduct>> {
    Ok(Json(state.grocery_service.create_product(product).await?))
}

async fn update_product(
    State(state): State<Arc<AppState>>,
    Json(product): Json<GroceryProductUpdate>,
) -> ApiResult<Json<GroceryProduct>> {
    Ok(Json(state.grocery_service.update_product(product).await?))
}

async fn delete_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.grocery_service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_deal_rules(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<DealRule>>> {
    Ok(Json(state.grocery_service.list_deal_rules()?))
}

async fn create_deal_rule(
    State(state): State<Arc<AppState>>,
    Json(rule): Json<NewDealRule>,
) -> ApiResult<Json<DealRule>> {
    Ok(Json(state.grocery_service.create_deal_rule(rule).await?))
}

async fn delete_deal_rule(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.grocery_service.delete_deal_rule(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Builds and prices a shopping basket from required quantities.
async fn price_basket(
    State(state): State<Arc<AppState>>,
    Json(requests): Json<Vec<ShoppingRequest>>,
) -> ApiResult<Json<BasketPricing>> {
    Ok(Json(state.grocery_service.price_shopping_list(&requests)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/groceries/basket/price", post(price_basket))
        .route(
            "/groceries/deal-rules",
            get(list_deal_rules).post(create_deal_rule),
        )
        .route("/groceries/deal-rules/{id}", delete(delete_deal_rule))
        .route(
            "/groceries/products",
            get(list_products).post(create_product).put(update_product),
        )
        .route(
            "/groceries/products/{id}",
            get(get_product).delete(delete_product),
        )
}
