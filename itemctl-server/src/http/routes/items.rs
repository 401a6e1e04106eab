//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::db::repos::{ItemRepo, Upserted};
use crate::http::error::ApiError;
use crate::http::extractors::LenientJson;
use crate::http::server::AppState;
use crate::models::{CreateItemPayload, DateQueryPayload, Item, ItemSummary};

/// GET /items - every item, ascending id
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = ItemRepo::new(&state.pool).list().await?;
    Ok(Json(items))
}

/// POST /items - insert, or add to the count of the item with the same
/// name and date
async fn create_item(
    State(state): State<Arc<AppState>>,
    LenientJson(body): LenientJson,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let new_item = CreateItemPayload::from_json(&body).validate(state.presence)?;

    let response = match ItemRepo::new(&state.pool).upsert(&new_item).await? {
        Upserted::Created(item) => (StatusCode::CREATED, Json(item)),
        Upserted::Incremented(item) => (StatusCode::OK, Json(item)),
    };
    Ok(response)
}

/// POST /items-by-date - name and count of items on one date
async fn items_by_date(
    State(state): State<Arc<AppState>>,
    LenientJson(body): LenientJson,
) -> Result<Json<Vec<ItemSummary>>, ApiError> {
    let date = DateQueryPayload::from_json(&body).into_date()?;
    let items = ItemRepo::new(&state.pool).by_date(date).await?;
    Ok(Json(items))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items-by-date", post(items_by_date))
}
