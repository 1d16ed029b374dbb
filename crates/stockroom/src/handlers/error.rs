use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use stockroom_core::response::StandardResponse;
use stockroom_core::storage::{repository_error_to_status_code, RepositoryError};

/// Invalid request input detected by the boundary itself, beyond what the
/// extractors catch (e.g. an oversized `limit`).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Boundary error type.
///
/// Everything a handler can fail with funnels through here and is rendered
/// as the standard envelope: repository errors get their mapped status code,
/// invalid request input (malformed body, query, or path, or a failed
/// boundary validation) gets 422, anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn is_validation_error(&self) -> bool {
        self.0.downcast_ref::<JsonRejection>().is_some()
            || self.0.downcast_ref::<QueryRejection>().is_some()
            || self.0.downcast_ref::<PathRejection>().is_some()
            || self.0.downcast_ref::<ValidationError>().is_some()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.is_validation_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Unhandled error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request failed");
        }

        (
            status_code,
            Json(StandardResponse::error(self.0.to_string())),
        )
            .into_response()
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
