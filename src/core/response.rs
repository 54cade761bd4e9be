use actix_web::http::StatusCode;
use serde::Serialize;

/// Envelope wrapped around every API payload.
///
/// `data` is only present on success and `errors` only on failure.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn fail(message: impl Into<String>, status: StatusCode, errors: serde_json::Value) -> Self {
        Self {
            status: status.as_u16(),
            success: false,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }
}
