//! Generated OpenAPI description of the service.

use axum::Json;
use utoipa::OpenApi;

use crate::routes::health;

/// Application title published in the OpenAPI `info` block.
pub const API_TITLE: &str = "Personal Job Applier API";

#[derive(OpenApi)]
#[openapi(
    info(title = API_TITLE),
    paths(health::check),
    components(schemas(health::HealthResponse)),
    tags((name = "health", description = "Liveness checks"))
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_carries_title_and_crate_version() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, API_TITLE);
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn documents_health_route() {
        let doc = ApiDoc::openapi();
        let path = doc.paths.paths.get("/health").expect("health path missing");
        assert!(path.get.is_some());
    }
}
