//! Route definitions for the API.

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers;
use super::SharedState;

/// Create the main API router
pub fn create_router(state: SharedState) -> Router {
    let openapi = super::openapi::build_openapi();
    let cors = cors_layer(state.config.cors_origins.as_deref());

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", openapi))
        .nest("/api", api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<SharedState> {
    Router::new()
        .nest("/resources", handlers::resources::router())
        .nest("/stats", handlers::stats::router())
        .nest("/catalog", handlers::catalog::router())
}

/// Any origin is allowed unless an explicit list is configured.
fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
