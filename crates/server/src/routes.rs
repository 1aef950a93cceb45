pub mod restaurants;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::directory::RestaurantDirectory;

use crate::openapi::ApiDoc;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, restaurant CRUD, and the
/// swagger UI serving the generated OpenAPI document.
pub fn build_router(directory: Arc<RestaurantDirectory>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/restaurants", get(restaurants::list))
        .route("/restaurant", post(restaurants::create))
        .route(
            "/restaurant/:id",
            put(restaurants::rename).delete(restaurants::remove),
        )
        .with_state(directory)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
