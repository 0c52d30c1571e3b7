use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{CODE_FAILURE, CODE_SUCCESS, MESSAGE_SUCCESS};

/// Envelope wrapping every API reply.
///
/// `code` is 0 on success and non-zero on failure. The HTTP status carries no
/// meaning for API routes; clients must inspect `code`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>) -> Self {
        Self {
            code: CODE_SUCCESS,
            message: MESSAGE_SUCCESS.to_string(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code: CODE_FAILURE,
            message: message.into(),
            data: None,
        }
    }
}

/// `?id=<int>` query used by the delete endpoints
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Record id
    pub id: i64,
}
