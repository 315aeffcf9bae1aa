use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::domain::categories::InvalidCategory;
use crate::domain::errors::ShelfError;
use crate::domain::year_window::InvalidYear;

#[derive(Debug, Error)]
pub enum AppError {
    /// The client sent something we can't serve; reported as 400 with a plain-text body.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Shelf(#[from] ShelfError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

impl From<InvalidCategory> for AppError {
    fn from(err: InvalidCategory) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<InvalidYear> for AppError {
    fn from(err: InvalidYear) -> Self {
        AppError::validation(err.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Handler-facing error that knows how to render itself.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<ShelfError> for ApiError {
    fn from(err: ShelfError) -> Self {
        ApiError(AppError::from(err))
    }
}

impl From<InvalidCategory> for ApiError {
    fn from(err: InvalidCategory) -> Self {
        ApiError(AppError::from(err))
    }
}

impl From<InvalidYear> for ApiError {
    fn from(err: InvalidYear) -> Self {
        ApiError(AppError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::Shelf(err) => {
                error!(error = %err, "request failed");
                let body = ErrorResponse {
                    message: err.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
