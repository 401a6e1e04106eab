//! Aggregate endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::ItemRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub total_count: f64,
}

/// GET /sum - total of every item's count
async fn sum(State(state): State<Arc<AppState>>) -> Result<Json<SumResponse>, ApiError> {
    let total_count = ItemRepo::new(&state.pool).total_count().await?;
    Ok(Json(SumResponse { total_count }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/sum", get(sum))
}
