//! Album errors as HTTP responses
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store detail is logged by the service and never reaches the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::json::IndentedJson;
use crate::error::AlbumError;

impl AlbumError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound { .. } => "not_found",
            Self::Store { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AlbumError {
    fn into_response(self) -> Response {
        if let Self::InvalidInput(e) = &self {
            tracing::debug!("Rejected request: {}", e);
        }

        let body = json!({
            "error": self.code(),
            "message": self.public_message(),
        });

        (self.status(), IndentedJson(body)).into_response()
    }
}
