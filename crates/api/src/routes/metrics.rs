//! Prometheus metrics endpoint.

use axum::extract::State;
use axum::http::header;
use metrics_exporter_prometheus::PrometheusHandle;

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /metrics: renders everything recorded through the installed recorder,
/// including the per-request series from [`crate::telemetry::track_requests`].
pub async fn get(
    State(handle): State<PrometheusHandle>,
) -> ([(header::HeaderName, &'static str); 1], String) {
    ([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], handle.render())
}

#[cfg(test)]
mod tests {
    use metrics_exporter_prometheus::PrometheusBuilder;

    use super::*;

    #[tokio::test]
    async fn renders_with_exposition_content_type() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        metrics::with_local_recorder(&recorder, || {
            metrics::counter!("health_probe_total").increment(2);
        });

        let ([(name, value)], body) = get(State(handle)).await;
        assert_eq!(name, header::CONTENT_TYPE);
        assert_eq!(value, PROMETHEUS_CONTENT_TYPE);
        assert!(body.contains("health_probe_total 2"));
    }
}
