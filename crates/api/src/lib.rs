//! HTTP API server for the personal job applier.
//!
//! Currently exposes a liveness check, a generated OpenAPI document and
//! Prometheus metrics, with structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::{ApiError, ConfigError, ServerError};
pub use routes::openapi::{API_TITLE, ApiDoc};

/// Creates the Axum application router with all routes.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/openapi.json", get(routes::openapi::document))
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::method_not_allowed)
        .layer(middleware::from_fn(telemetry::track_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on the configured `host:port`.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on `listener` until `shutdown` resolves, then
/// drains in-flight requests.
pub async fn run<F>(
    listener: TcpListener,
    metrics_handle: PrometheusHandle,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "starting API server");
    }

    axum::serve(listener, create_app(metrics_handle))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
