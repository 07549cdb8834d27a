//! Common test utilities

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use hello_world_api::{build_app, App, Config, LogFormat};
use tower::ServiceExt;

/// Build the application with a test configuration
pub fn setup_app(environment: &str) -> App {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: environment.to_string(),
        log_format: LogFormat::Pretty,
    };
    build_app(&config)
}

/// Issue a GET request against the app
pub async fn get(app: &App, uri: &str) -> Response<Body> {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// Collect a response body into a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
