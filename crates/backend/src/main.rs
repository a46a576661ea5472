pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use axum::http::{header, Method};
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::logging::init(&std::path::Path::new("target").join("logs"))?;

    let config = shared::config::load_config()?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    tracing::info!("Serving frontend from: {}", config.dist_dir().display());
    let state = shared::state::AppState::new(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state)
        .layer(middleware::from_fn(shared::logging::request_logger))
        .layer(cors);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            tracing::error!(
                "Port {} is already in use, stop the other process or change server.port in config.toml",
                addr.port()
            );
        } else {
            tracing::error!("Failed to bind to {}: {}", addr, e);
        }
        e
    })?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
