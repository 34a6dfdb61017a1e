//! HTTP server layer
//!
//! Axum server with:
//! - Album routes over `AlbumService`
//! - Request tracing, timeouts and panic recovery
//! - Graceful shutdown
//! - Indented JSON bodies, including errors

pub mod error;
pub mod extractors;
pub mod json;
pub mod routes;
pub mod server;

pub use json::IndentedJson;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
