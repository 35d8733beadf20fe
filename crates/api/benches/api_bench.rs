use axum::body::Body;
use axum::http::Request;
use criterion::{Criterion, criterion_group, criterion_main};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

fn bench_health_check(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let app = job_applier_api::create_app(handle);

    c.bench_function("api/health_check", |b| {
        b.iter(|| {
            rt.block_on(async {
                let response = app
                    .clone()
                    .oneshot(
                        Request::builder()
                            .uri("/health")
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_openapi_document(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let app = job_applier_api::create_app(handle);

    c.bench_function("api/openapi_document", |b| {
        b.iter(|| {
            rt.block_on(async {
                app.clone()
                    .oneshot(
                        Request::builder()
                            .uri("/openapi.json")
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_health_check, bench_openapi_document);
criterion_main!(benches);
