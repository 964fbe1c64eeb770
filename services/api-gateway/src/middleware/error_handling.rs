use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use formula_utils::{ErrorResponse, FormulaError};
use thiserror::Error;

/// Wraps [`FormulaError`] so handlers can return it directly.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub FormulaError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}

/// Fallback for unknown routes
pub async fn route_not_found() -> ApiError {
    ApiError(FormulaError::not_found("route"))
}
