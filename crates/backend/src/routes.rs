use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    // Картинки и шрифты отдаются без версии; отсутствующий файл - редирект на корень
    let plain_assets = ServeDir::new(state.config.dist_dir().join("assets"))
        .fallback(handlers::static_files::redirect_to_root.into_service());

    Router::new()
        .route("/health", get(handlers::health::health))
        // ========================================
        // API
        // ========================================
        .route(
            "/api/data/load",
            get(handlers::a001_reference_data::load),
        )
        .route(
            "/api/order/submit",
            post(handlers::a002_procurement_request::submit_order),
        )
        .route(
            "/api/quote/submit",
            post(handlers::a002_procurement_request::submit_quote),
        )
        // ========================================
        // STATIC (cache busting)
        // ========================================
        .route("/", get(handlers::static_files::index))
        .route("/index.html", get(handlers::static_files::index))
        .route("/:name", get(handlers::static_files::asset))
        .nest_service("/assets", plain_assets)
        .fallback(handlers::static_files::redirect_to_root)
        .with_state(state)
}
