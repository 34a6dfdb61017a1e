//! Health check endpoint
//!
//! Reports the service version and whether the album store answers a ping.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;

use crate::http::json::IndentedJson;
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// GET /health - 200 while the store answers, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, IndentedJson<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.albums.ping().await {
        Ok(()) => (
            StatusCode::OK,
            IndentedJson(HealthResponse {
                status: "ok",
                version,
                store: "reachable",
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            IndentedJson(HealthResponse {
                status: "unavailable",
                version,
                store: "unreachable",
            }),
        ),
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
