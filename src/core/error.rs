use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// `NotFound` and `Validation` carry caller-facing messages verbatim, so their
/// Display impls are the bare message without a prefix.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Referenced identifier does not resolve to an available record
    #[error("{0}")]
    NotFound(String),

    /// A batch of requested identifiers is not fully resolvable
    #[error("{0}")]
    Validation(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Error envelope for the RPC-style contract.
///
/// Service-to-service callers receive every domain failure as a flat
/// `{status, message}` body with a bad-request-equivalent code, so the caller
/// can re-raise it across its own service boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub status: u16,
    pub message: String,
}

impl From<&AppError> for RpcErrorBody {
    fn from(err: &AppError) -> Self {
        RpcErrorBody {
            status: StatusCode::BAD_REQUEST.as_u16(),
            message: err.to_string(),
        }
    }
}
