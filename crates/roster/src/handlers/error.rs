use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::employee::{EmployeeError, ErrorDetail};
use roster_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on anything convertible into `anyhow::Error`. The
/// response status is picked by downcasting to the errors we know about;
/// everything else is an opaque 500. Bodies are always `{"detail": ...}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Status code and client-facing detail for this error.
    fn status_and_detail(&self) -> (StatusCode, String) {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let status = StatusCode::from_u16(repository_error_to_status_code(repo_error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return match repo_error {
                RepositoryError::NotFound { .. } => (status, repo_error.to_string()),
                _ => (status, canonical_reason(status)),
            };
        }

        if let Some(validation) = self.0.downcast_ref::<EmployeeError>() {
            return (StatusCode::UNPROCESSABLE_ENTITY, validation.to_string());
        }

        // Every malformed request (bad JSON, wrong content type, non-integer id)
        // is reported as unprocessable, whatever status axum would pick.
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }

        if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (status, canonical_reason(status))
    }
}

fn canonical_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Internal Server Error")
        .to_string()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, detail = %detail, "Request rejected");
        }

        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
