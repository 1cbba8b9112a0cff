use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// Error surfaced to API clients. Each kind maps to a curated message so
/// internal failure detail never reaches the response body; the client
/// contract is a 400 with a JSON `error` field in every failure case.
#[derive(Debug)]
pub enum ApiError {
    /// A required key was absent from the request payload
    MissingField(&'static str),
    /// The storage layer failed; the cause is logged, not echoed
    Storage,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            ApiError::MissingField(field) => format!("missing required field: {field}"),
            ApiError::Storage => "storage operation failed".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({})", self.message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = axum::Json(ErrorBody {
            error: self.message(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Logs the underlying storage failure and collapses it to the client-facing
/// error kind
pub fn storage_error(err: crate::errors::Error) -> ApiError {
    error!("storage error: {err}");
    ApiError::Storage
}
