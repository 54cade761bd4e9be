use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

use crate::core::response::ApiResponse;
use crate::modules::analytics::models::AnalyticsError;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Rejected analytics request or broken pipeline contract
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Stable machine-readable code placed in `errors.code`
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Analytics(e) => e.code(),
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    fn details(&self) -> serde_json::Value {
        match self {
            AppError::Analytics(e) => e.details(),
            _ => json!({ "code": self.code() }),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let body: ApiResponse<()> = ApiResponse::fail(self.to_string(), status_code, self.details());

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Analytics(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Analytics(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
