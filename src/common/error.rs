use crate::common::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Domain failure taxonomy. Transport mapping lives in the
/// [`IntoResponse`] impl below so services stay HTTP-agnostic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("the record was modified by another user")]
    Conflict,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Value>::error("Resource not found")),
            )
                .into_response(),
            AppError::Validation(errors) => {
                let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiResponse::error_with_details("Validation failed", details)),
                )
                    .into_response()
            }
            AppError::Conflict => (
                StatusCode::CONFLICT,
                Json(ApiResponse::<Value>::error(
                    "The record was modified by another user",
                )),
            )
                .into_response(),
            AppError::Database(e) => {
                error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Value>::error(
                        "Unable to save changes. Try again, and if the problem \
                         persists see your system administrator.",
                    )),
                )
                    .into_response()
            }
        }
    }
}
