//! Health check handler for service monitoring.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use tracing::{debug, error, instrument};

use crate::AppState;

/// `GET /health` - database connectivity probe.
///
/// Designed to be called frequently by orchestration systems, so it runs
/// a single trivial query and nothing else.
#[instrument(name = "health_check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.storage.health_check().await {
        Ok(()) => {
            debug!("Health check passed");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "healthy",
                    "timestamp": Utc::now(),
                    "version": env!("CARGO_PKG_VERSION"),
                })),
            )
                .into_response()
        },
        Err(e) => {
            error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "timestamp": Utc::now(),
                    "error": e.to_string(),
                })),
            )
                .into_response()
        },
    }
}
