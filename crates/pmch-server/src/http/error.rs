use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pmch_core::models::ApiResponse;

pub type HttpResult<T> = Result<T, HttpError>;

/// Failure rendered as `{"success": false, "error": message}`.
#[derive(Debug)]
pub struct HttpError {
    message: String,
    status: StatusCode,
}

impl HttpError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Unhandled fault. The detail reaches the client only when `expose` is set.
    pub fn internal(detail: impl Into<String>, expose: bool) -> Self {
        let message = if expose {
            detail.into()
        } else {
            "Internal server error".to_string()
        };
        Self {
            message,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::failure(self.message))).into_response()
    }
}
