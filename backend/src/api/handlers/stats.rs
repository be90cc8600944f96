//! Aggregate counts for the landing page.

use axum::{extract::State, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::SharedState;
use crate::error::Result;
use crate::models::ResourceStats;

pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(get_stats))
}

/// Resource counts per category group
#[utoipa::path(
    get,
    path = "",
    context_path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Counts of notes, question papers, books and interview material", body = ResourceStats),
    )
)]
pub async fn get_stats(State(state): State<SharedState>) -> Result<Json<ResourceStats>> {
    Ok(Json(state.resources.stats().await?))
}

#[derive(OpenApi)]
#[openapi(paths(get_stats), components(schemas(ResourceStats)))]
pub struct StatsApiDoc;
