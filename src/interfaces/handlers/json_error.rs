use actix_web::{
    error::JsonPayloadError,
    http::StatusCode,
    HttpResponse, ResponseError,
};
use serde_json::json;

/// Malformed or incomplete JSON bodies get the same `{ success, message }`
/// envelope as every other failure instead of actix's plain-text default.
#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(json!({
            "success": false,
            "message": self.message
        }))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        JsonError {
            message: format!("Invalid JSON payload: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}
