//! Hello World API
//!
//! A minimal RESTful API: one greeting endpoint plus its OpenAPI
//! documentation and Swagger UI.

use std::net::SocketAddr;

use axum::{extract::Request, ServiceExt};
use hello_world_api::api::docs::{OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use hello_world_api::{build_app, Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hello_world_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);

    let addr: SocketAddr = config.bind_address().parse()?;

    tracing::info!(
        environment = %config.environment,
        "Starting Hello World API"
    );

    if config.is_development() {
        tracing::warn!("Development mode: panic details are returned to clients");
    }

    let app = build_app(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "API documentation at http://{}{} (viewer at {}/)",
        addr,
        OPENAPI_JSON_PATH,
        SWAGGER_UI_PATH
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Hello World API stopped");

    Ok(())
}

/// Resolves once the process is asked to stop (Ctrl+C, or SIGTERM on unix)
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    tracing::info!(signal, "Stopping Hello World API, draining open connections");
}
