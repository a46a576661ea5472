use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use contracts::domain::a002_procurement_request::{ProcurementRequest, RequestType, SubmitResponse};

use crate::domain::a002_procurement_request::service;
use crate::shared::{error::AppError, state::AppState};

/// POST /api/order/submit
pub async fn submit_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProcurementRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    submit(RequestType::Order, &state, payload)
}

/// POST /api/quote/submit
pub async fn submit_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProcurementRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    submit(RequestType::Quote, &state, payload)
}

fn submit(
    request_type: RequestType,
    state: &AppState,
    payload: Result<Json<ProcurementRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::MalformedPayload(e.body_text()))?;
    let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;

    let reference_id = service::submit(request_type, &request, &state.reference, now_ms)
        .map_err(AppError::Validation)?;

    Ok(Json(SubmitResponse::accepted(request_type, reference_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use axum::response::IntoResponse;
    use contracts::domain::a002_procurement_request::SelectedMaterial;

    fn state() -> Arc<AppState> {
        AppState::new(parse_config("").unwrap()).unwrap()
    }

    fn request() -> ProcurementRequest {
        ProcurementRequest {
            category: "Electrical".into(),
            supplier_id: "SUP-002".into(),
            supplier_name: "Harbor Trade Supply".into(),
            requestor_name: "Ann Buyer".into(),
            requestor_email: "ann@example.com".into(),
            request_type: RequestType::Quote,
            notes: "Deliver to gate 3".into(),
            materials: vec![SelectedMaterial {
                id: "MAT-201".into(),
                name: "Cable NYM 3x2.5".into(),
                code: "NYM-325".into(),
                unit: "m".into(),
                subcategory: "Cables".into(),
                quantity: 150,
            }],
        }
    }

    #[tokio::test]
    async fn test_submit_quote_returns_quote_id() {
        let Json(resp) = submit_quote(State(state()), Ok(Json(request()))).await.unwrap();
        assert!(resp.success);
        assert!(resp.quote_id.as_deref().is_some_and(|id| id.starts_with("QUOTE-")));
        assert!(resp.order_id.is_none());
    }

    #[tokio::test]
    async fn test_submit_order_returns_order_id() {
        let Json(resp) = submit_order(State(state()), Ok(Json(request()))).await.unwrap();
        assert!(resp.order_id.as_deref().is_some_and(|id| id.starts_with("ORDER-")));
    }

    #[tokio::test]
    async fn test_invalid_request_is_bad_request() {
        let mut r = request();
        r.materials.clear();
        let err = submit_order(State(state()), Ok(Json(r))).await.unwrap_err();
        let resp = err.into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Список материалов пуст");
    }

    async fn post_order(content_type: &str, body: &'static str) -> axum::response::Response {
        use tower::ServiceExt;

        crate::routes::configure_routes(state())
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/api/order/submit")
                    .header(axum::http::header::CONTENT_TYPE, content_type)
                    .body(axum::body::Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_malformed_payload_is_bad_request() {
        for (content_type, body) in [
            ("application/json", r#"{"materials":"#),
            ("application/json", r#"{"materials": 5}"#),
            ("text/plain", r#"{"category": "Plumbing"}"#),
        ] {
            let resp = post_order(content_type, body).await;
            assert_eq!(resp.status(), axum::http::StatusCode::BAD_REQUEST, "{body}");

            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(json["success"], false);
            assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
        }
    }
}
