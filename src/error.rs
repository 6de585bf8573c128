//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

/// Request-level failures. Each one is terminal for the request it
/// occurs in and never changes the gateway state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Model not loaded. Please check the server logs.")]
    ModelUnavailable,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Error in prediction: {0}")]
    Inference(String),

    #[error("Failed to render page: {0}")]
    Render(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Inference(msg) => {
                tracing::error!("Inference error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Render(msg) => {
                tracing::error!("Template error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Plain-text bodies; the UI is form-driven, not an API
        (status, self.to_string()).into_response()
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Unavailable => AppError::ModelUnavailable,
            other => AppError::Inference(other.to_string()),
        }
    }
}
