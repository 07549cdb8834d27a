//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{extract::OriginalUri, routing::get, Router};

use crate::error::AppError;

/// Fixed payload of the hello endpoint
pub const HELLO_MESSAGE: &str = "Hello World";

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/hello", get(hello_world))
        .fallback(not_found)
}

/// Returns the greeting
#[utoipa::path(
    get,
    path = "/hello",
    tag = "HelloWorld",
    responses(
        (status = 200, description = "Greeting", content_type = "text/plain", body = String)
    )
)]
pub async fn hello_world() -> &'static str {
    HELLO_MESSAGE
}

/// Fallback for every unmatched path, reported as the client sent it
async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}
