// ---------------------------------------------------------------------------
// API error types
// ---------------------------------------------------------------------------

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use urlscan_types::RequestError;

/// Handler error carrying the user-facing (Turkish) message as its body.
/// Method errors (405) never reach this type; axum's method routing rejects
/// them before a handler runs.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input, rejected before any subprocess runs.
    BadRequest(String),
    /// 500 Internal Server Error — storage failure.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, message).into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            ApiError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}
