//! API server entry point.

use std::process::ExitCode;

use job_applier_api::{Config, ServerError};
use tokio::signal;

/// Resolves once SIGINT or SIGTERM arrives. A signal whose handler cannot be
/// installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "could not listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal = received, "starting graceful shutdown");
}

async fn start() -> Result<(), ServerError> {
    // 1. Load configuration
    let config = Config::from_env()?;

    // 2. Initialize tracing
    job_applier_api::telemetry::init_tracing(&config)?;

    // 3. Install Prometheus metrics recorder
    let metrics_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 4. Bind and serve
    let listener = job_applier_api::bind(&config).await?;
    job_applier_api::run(listener, metrics_handle, shutdown_signal()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server exited with error");
            eprintln!("job-applier-api: {err}");
            ExitCode::FAILURE
        }
    }
}
