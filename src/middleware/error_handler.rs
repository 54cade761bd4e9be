use actix_web::{
    error::{InternalError, QueryPayloadError},
    http::StatusCode,
    web, Error, HttpRequest, HttpResponse, ResponseError,
};
use serde_json::json;

use crate::core::{ApiResponse, AppError};

/// Query extractor config that answers malformed query strings with the standard envelope
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

/// Map query decoding failures to `400 INVALID_QUERY`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), "Rejected query string: {}", err);

    let response = error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid query string: {}", err),
        "INVALID_QUERY",
    );
    InternalError::from_response(err, response).into()
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    AppError::not_found(req.path().to_string()).error_response()
}

/// Helper function to create standardized error responses
pub fn error_response(status_code: StatusCode, message: String, code: &str) -> HttpResponse {
    let body: ApiResponse<()> = ApiResponse::fail(message, status_code, json!({ "code": code }));
    HttpResponse::build(status_code).json(body)
}
