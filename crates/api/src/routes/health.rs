//! Health check endpoint.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by `GET /health`. Always `{"status": "ok"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
}

impl HealthResponse {
    pub const OK: HealthResponse = HealthResponse { status: "ok" };
}

/// GET /health: liveness check for load balancers and orchestrators.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn check_returns_ok_status() {
        let Json(body) = check().await;
        assert_eq!(body.status, "ok");
    }

    #[test]
    fn serializes_to_exact_payload() {
        let json = serde_json::to_string(&HealthResponse::OK).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
