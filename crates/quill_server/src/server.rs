//! Router assembly and serving.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::author_routes::author_routes;
use crate::config::ServerConfig;
use crate::post_routes::post_routes;
use crate::state::AppState;

/// Builds the full application router over the shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Permissive CORS; the API carries no credentials or cookies.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(author_routes(state.clone()))
        .merge(post_routes(state))
        .layer(cors)
}

/// Binds the configured address and serves until interrupted.
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> Result<(), std::io::Error> {
    let router = build_router(state);
    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!(
        "event=server_start module=server status=ok addr={} db={}",
        config.socket_addr(),
        config.database_path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    // Ctrl-C is the only shutdown trigger; failure to install the handler
    // leaves the server running until killed, which is acceptable here.
    let _ = tokio::signal::ctrl_c().await;
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    version: &'static str,
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthBody {
            status: "ok",
            version: quill_core::core_version(),
        }),
    )
}
