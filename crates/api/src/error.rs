//! Error types for the HTTP surface and for server startup.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("Not Found")]
    NotFound,
    /// The path exists but does not accept the request method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Invalid values found while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {value:?}")]
    InvalidPort { value: String },

    #[error("LOG_FORMAT must be \"pretty\" or \"json\", got {value:?}")]
    InvalidLogFormat { value: String },
}

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialize tracing: {0}")]
    Telemetry(#[from] TryInitError),

    #[error("failed to install Prometheus recorder: {0}")]
    MetricsRecorder(#[from] BuildError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
