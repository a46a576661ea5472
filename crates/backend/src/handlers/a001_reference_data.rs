use axum::{extract::State, Json};
use std::sync::Arc;

use contracts::domain::a001_reference_data::LoadDataResponse;

use crate::shared::state::AppState;

/// GET /api/data/load
pub async fn load(State(state): State<Arc<AppState>>) -> Json<LoadDataResponse> {
    Json(LoadDataResponse::ok(state.reference.clone()))
}
