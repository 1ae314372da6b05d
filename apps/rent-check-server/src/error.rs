//! Error types for the rent-check server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rent_check::ReportError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Rejected before reaching the engine
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::Report(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.code()),
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
