//! API module
//!
//! HTTP endpoints, documentation and the request pipeline.

pub mod docs;
pub mod middleware;
pub mod routes;

use std::any::Any;

use axum::{extract::Request, middleware as axum_middleware, Router};
use tower::{util::MapRequest, util::MapRequestLayer, Layer};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::panic_response;

pub use routes::create_router;

/// The complete application: router wrapped by path normalization
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the application with the full request pipeline.
///
/// Path normalization wraps the router from the outside so it applies
/// before route matching.
pub fn build_app(config: &Config) -> App {
    let router = Router::new()
        .merge(docs::router())
        .merge(create_router());

    let normalize: fn(Request) -> Request = middleware::lowercase_path;
    MapRequestLayer::new(normalize).layer(with_pipeline(router, config))
}

/// Apply the cross-cutting layers to a router.
///
/// Axum layers are applied in reverse order (last added = first executed).
/// Order: request id -> trace -> catch panic -> authorization -> logging -> handler
fn with_pipeline(router: Router, config: &Config) -> Router {
    let developer_details = config.is_development();

    router
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(axum_middleware::from_fn(middleware::authorization_middleware))
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(err, developer_details),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
