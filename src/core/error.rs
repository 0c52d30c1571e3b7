use axum::{
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Covers both a failed ownership check and a missing record.
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message returned to the caller. Internal detail never leaves the process.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "Database error".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::PermissionDenied => "Permission denied".to_string(),
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// API failures are reported inside the envelope; the transport status stays 200.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            AppError::InvalidInput(ref msg) => tracing::debug!("Invalid input: {}", msg),
            AppError::PermissionDenied | AppError::MethodNotAllowed => {}
        }

        Json(ApiResponse::<()>::error(self.public_message())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Method fallback for API routes
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
