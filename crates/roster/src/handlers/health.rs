//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (opens a storage connection)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the database file can be opened and queried, 503 otherwise.
/// The storage error itself is only logged.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.employee_repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "ready": true }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "ready": false,
                    "detail": StatusCode::SERVICE_UNAVAILABLE
                        .canonical_reason()
                        .unwrap_or("Service Unavailable")
                })),
            )
                .into_response()
        }
    }
}
