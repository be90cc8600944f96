//! Reference lists used to build filter controls.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::SharedState;
use crate::models::catalog::CategoryOption;
use crate::models::Catalog;

pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(get_catalog))
}

/// Categories, subjects and semesters accepted as filter values
#[utoipa::path(
    get,
    path = "",
    context_path = "/api/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Reference catalog", body = Catalog),
    )
)]
pub async fn get_catalog() -> Json<Catalog> {
    Json(Catalog::new())
}

#[derive(OpenApi)]
#[openapi(paths(get_catalog), components(schemas(Catalog, CategoryOption)))]
pub struct CatalogApiDoc;
