use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::shared::{cache_busting, error::AppError, state::AppState};

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// GET / и GET /index.html
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let path = state.config.dist_dir().join("index.html");
    let html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(path.display().to_string())
        } else {
            AppError::Internal(e)
        }
    })?;

    let body = cache_busting::inject_version(
        &html,
        state.asset_version,
        &state.config.assets.versioned_extensions,
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, NO_CACHE),
        ],
        body,
    )
        .into_response())
}

/// GET /:name - скрипты, стили и wasm из корня сборки
pub async fn asset(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> Response {
    let Some(name) = cache_busting::asset_name(&name) else {
        return redirect_to_root_path(&name).into_response();
    };
    let versioned = cache_busting::extension(name).is_some_and(|ext| {
        state
            .config
            .assets
            .versioned_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    });
    if !versioned {
        return redirect_to_root_path(name).into_response();
    }

    let path = state.config.dist_dir().join(name);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return redirect_to_root_path(name).into_response();
        }
        Err(e) => return AppError::Internal(e).into_response(),
    };

    let body = if cache_busting::is_stylesheet(name) {
        let css = String::from_utf8_lossy(&bytes);
        cache_busting::prefix_stylesheet(&css, state.asset_version).into_bytes()
    } else {
        bytes
    };

    let cache_control = format!("public, max-age={}", state.config.assets.max_age_secs);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, cache_busting::content_type(name).to_string()),
            (header::CACHE_CONTROL, cache_control),
        ],
        body,
    )
        .into_response()
}

/// Все остальные пути - на корень
pub async fn redirect_to_root(uri: Uri) -> Redirect {
    redirect_to_root_path(uri.path())
}

fn redirect_to_root_path(path: &str) -> Redirect {
    tracing::debug!("Redirecting unmatched path '{}' to /", path);
    Redirect::to("/")
}
