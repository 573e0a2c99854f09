//! HTTP error mapping.
//!
//! Translates access-layer errors into status codes and `{"error": ..}`
//! JSON bodies: validation/conflict -> 400, not-found -> 404, storage
//! failures -> 500. Nothing is retried or swallowed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use quill_core::RepoError;
use serde::Serialize;

/// JSON error body shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Transport wrapper around an access-layer error.
#[derive(Debug)]
pub struct ApiError(RepoError);

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RepoError::Validation(_) | RepoError::Conflict { .. } => StatusCode::BAD_REQUEST,
            RepoError::AuthorNotFound(_) | RepoError::PostNotFound(_) => StatusCode::NOT_FOUND,
            RepoError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("event=request_failed module=server status=error error={}", self.0);
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
