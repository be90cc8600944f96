//! Resource listing, lookup, creation and download handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::api::dto::{DownloadResponse, ListResourcesQuery};
use crate::api::SharedState;
use crate::error::{AppError, Result};
use crate::models::{CreateResourceRequest, Resource};
use crate::services::query_engine::ResourceQuery;
use crate::storage::not_found;

/// Create resource routes
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_resources).post(create_resource))
        .route("/featured", get(featured_resources))
        .route("/:id", get(get_resource))
        .route("/:id/download", post(download_resource))
}

/// Path ids that are not integers can never match a record.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Resource {} not found", raw)))
}

async fn find_resource(state: &SharedState, raw_id: &str) -> Result<Resource> {
    let id = parse_id(raw_id)?;
    state
        .resources
        .get(id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// List resources with optional filters and ordering
#[utoipa::path(
    get,
    path = "",
    context_path = "/api/resources",
    tag = "resources",
    params(ListResourcesQuery),
    responses(
        (status = 200, description = "Matching resources", body = Vec<Resource>),
        (status = 503, description = "Storage unavailable", body = crate::api::openapi::ErrorResponse),
    )
)]
pub async fn list_resources(
    State(state): State<SharedState>,
    Query(query): Query<ListResourcesQuery>,
) -> Result<Json<Vec<Resource>>> {
    let query = ResourceQuery::from(query);
    let resources = state.resources.list(&query).await?;
    Ok(Json(resources))
}

/// The most downloaded resources
#[utoipa::path(
    get,
    path = "/featured",
    context_path = "/api/resources",
    tag = "resources",
    responses(
        (status = 200, description = "Up to six resources by downloads", body = Vec<Resource>),
    )
)]
pub async fn featured_resources(State(state): State<SharedState>) -> Result<Json<Vec<Resource>>> {
    Ok(Json(state.resources.featured().await?))
}

/// Get a single resource
#[utoipa::path(
    get,
    path = "/{id}",
    context_path = "/api/resources",
    tag = "resources",
    params(
        ("id" = i64, Path, description = "Resource ID"),
    ),
    responses(
        (status = 200, description = "Resource details", body = Resource),
        (status = 404, description = "Resource not found", body = crate::api::openapi::ErrorResponse),
    )
)]
pub async fn get_resource(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Resource>> {
    Ok(Json(find_resource(&state, &id).await?))
}

/// Create a resource
#[utoipa::path(
    post,
    path = "",
    context_path = "/api/resources",
    tag = "resources",
    request_body = CreateResourceRequest,
    responses(
        (status = 201, description = "Resource created", body = Resource),
        (status = 400, description = "Missing or invalid fields", body = crate::api::openapi::ErrorResponse),
    )
)]
pub async fn create_resource(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<CreateResourceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Resource>)> {
    let Json(payload) = payload?;
    let resource = state.resources.create(payload).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// Record a download and return where to fetch the file
#[utoipa::path(
    post,
    path = "/{id}/download",
    context_path = "/api/resources",
    tag = "resources",
    params(
        ("id" = i64, Path, description = "Resource ID"),
    ),
    responses(
        (status = 200, description = "Download recorded", body = DownloadResponse),
        (status = 404, description = "Resource not found", body = crate::api::openapi::ErrorResponse),
    )
)]
pub async fn download_resource(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DownloadResponse>> {
    let resource = find_resource(&state, &id).await?;
    state.resources.increment_downloads(resource.id).await?;
    Ok(Json(DownloadResponse::from(&resource)))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list_resources,
        featured_resources,
        get_resource,
        create_resource,
        download_resource,
    ),
    components(schemas(Resource, CreateResourceRequest, DownloadResponse))
)]
pub struct ResourcesApiDoc;
