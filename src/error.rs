//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound(String),

    /// A handler panicked; `details` carries the panic message in development
    #[error("Internal server error")]
    Unhandled { details: Option<String> },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 404 Not Found
            AppError::NotFound(path) => {
                (StatusCode::NOT_FOUND, "not_found", Some(path.clone()))
            }

            // 500 Internal Server Error
            AppError::Unhandled { details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", details.clone())
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Build the response for a panic caught in the request pipeline.
///
/// With `developer_details` set the panic message is included in the body,
/// otherwise the client only sees a generic 500.
pub fn panic_response(err: Box<dyn Any + Send + 'static>, developer_details: bool) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %message, "Request handler panicked");

    AppError::Unhandled {
        details: developer_details.then_some(message),
    }
    .into_response()
}
