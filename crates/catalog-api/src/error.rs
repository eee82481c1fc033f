//! API error type and HTTP status mapping.
//!
//! Every handler catches and maps failures locally through this type; there
//! is no centralized error middleware. Client errors (validation, missing
//! id, duplicate name) render as `{"message": ...}`, store failures render
//! as `{"error": ...}` carrying the raw driver message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use catalog_core::{CoreError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Failure modes a product request can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `id` query parameter required but absent.
    #[error("Product ID is required")]
    MissingId,

    /// Payload failed a business rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another product already carries the requested name.
    #[error("Product with this name already exists")]
    DuplicateName,

    /// No product matched the requested id.
    #[error("Product not found")]
    NotFound,

    /// The store rejected the operation. Message passes through verbatim.
    #[error(transparent)]
    Store(#[from] CoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingId | Self::Validation(_) | Self::DuplicateName => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            Self::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
        }
    }
}
