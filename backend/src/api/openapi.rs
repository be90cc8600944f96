//! OpenAPI document generated from handler annotations via utoipa.

use utoipa::OpenApi;

/// Top-level OpenAPI document.
///
/// Handler modules contribute their paths through per-module
/// `#[derive(OpenApi)]` structs merged in [`build_openapi`].
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resource Hub API",
        description = "Catalog of academic and interview-preparation study materials.",
        version = "0.1.0",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "resources", description = "Resource listing, lookup, creation and downloads"),
        (name = "stats", description = "Aggregate resource counts"),
        (name = "catalog", description = "Reference categories, subjects and semesters"),
        (name = "health", description = "Health and readiness checks"),
    ),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;

/// Standard error response body returned by all endpoints on failure.
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Build the merged OpenAPI document from all handler modules.
pub fn build_openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.merge(super::handlers::resources::ResourcesApiDoc::openapi());
    doc.merge(super::handlers::stats::StatsApiDoc::openapi());
    doc.merge(super::handlers::catalog::CatalogApiDoc::openapi());
    doc.merge(super::handlers::health::HealthApiDoc::openapi());

    doc
}
