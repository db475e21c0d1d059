//! Boundary error taxonomy and its response mapping.
//!
//! The `Display` strings double as the wire messages, so each body text
//! lives in exactly one place.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors surfaced by the route handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No todo exists for the requested id.
    #[error("Todo non trouvé")]
    TodoNotFound,

    /// Create request without a usable title.
    #[error("Le titre est requis")]
    TitleRequired,

    /// Update request with an explicitly blank title.
    #[error("Le titre ne peut pas être vide")]
    TitleEmpty,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::TodoNotFound => StatusCode::NOT_FOUND,
            ApiError::TitleRequired | ApiError::TitleEmpty => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
