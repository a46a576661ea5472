use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::shared::state::AppState;

pub const SERVICE_NAME: &str = "procurement-form";

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": state.asset_version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    #[tokio::test]
    async fn test_health_reports_version() {
        let state = AppState::new(parse_config("[assets]\nversion = 77\n").unwrap()).unwrap();
        let Json(body) = health(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], SERVICE_NAME);
        assert_eq!(body["version"], 77);
    }
}
