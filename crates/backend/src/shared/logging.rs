//! Логирование: tracing в stdout и в файл, строка на каждый HTTP-запрос

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::format::{format_number, log_time};

const DEFAULT_FILTER: &str = "info,tower_http=warn";

/// Подписчик tracing: фильтр из `RUST_LOG`, консоль и `<log_dir>/backend.log`
pub fn init(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .try_init()?;
    Ok(())
}

/// Middleware: `время | мс | размер | статус метод путь`
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let (response, size) = buffered(response).await;

    println!(
        "{}",
        request_line(&method, &path, status, size, started.elapsed().as_millis())
    );
    response
}

/// Дочитать тело ответа, чтобы узнать его размер. `Content-Length`
/// выставляется по прочитанным байтам; если тело не читается, клиент
/// получает пустое тело с тем же статусом.
async fn buffered(response: Response) -> (Response, Option<u64>) {
    let (mut parts, body) = response.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = bytes.len() as u64;
            parts
                .headers
                .insert(header::CONTENT_LENGTH, HeaderValue::from(size));
            (Response::from_parts(parts, Body::from(bytes)), Some(size))
        }
        Err(e) => {
            tracing::warn!("Failed to read response body: {}", e);
            parts.headers.remove(header::CONTENT_LENGTH);
            (Response::from_parts(parts, Body::empty()), None)
        }
    }
}

fn request_line(method: &str, path: &str, status: u16, size: Option<u64>, elapsed_ms: u128) -> String {
    // 2xx/3xx голубым, ошибки жёлтым
    let color = if status < 400 { "36" } else { "33" };
    let size = size.map(format_number).unwrap_or_else(|| "-".to_string());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        log_time(chrono::Utc::now()),
        elapsed_ms,
        size,
        status,
        method,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Json, Router};
    use tower::ServiceExt;

    fn logged_app() -> Router {
        Router::new()
            .route("/text", get(|| async { "x".repeat(5_000) }))
            .route(
                "/json",
                get(|| async { Json(serde_json::json!({ "items": vec!["material"; 300] })) }),
            )
            .layer(middleware::from_fn(request_logger))
    }

    async fn fetch(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_logger_measures_response_body() {
        let resp = fetch(logged_app(), "/text").await;
        assert_eq!(resp.headers()[header::CONTENT_LENGTH], "5000");
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body.len(), 5_000);

        let resp = fetch(logged_app(), "/json").await;
        let declared: usize = resp.headers()[header::CONTENT_LENGTH]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(declared > 3_000);
        assert_eq!(declared, body.len());
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["items"].as_array().map(Vec::len), Some(300));
    }

    #[tokio::test]
    async fn test_buffered_reports_size() {
        let (resp, size) = buffered(Response::new(Body::from("abc"))).await;
        assert_eq!(size, Some(3));
        assert_eq!(resp.headers()[header::CONTENT_LENGTH], "3");
    }

    #[test]
    fn test_request_line_fields() {
        let line = request_line("POST", "/api/order/submit", 200, Some(1_234_567), 12);
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("1.234.567"));
        assert!(line.ends_with("200   POST /api/order/submit"));
    }

    #[test]
    fn test_request_line_error_without_size() {
        let line = request_line("GET", "/missing.js", 404, None, 0);
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("|            - |"));
    }
}
