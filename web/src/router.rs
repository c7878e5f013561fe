//! Router configuration.
//!
//! Builds the complete Axum router with all endpoints and layers.

use crate::error::AppError;
use crate::handlers::{events, health};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    http::{StatusCode, Uri},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// - `/health`, `/ready`: probes
/// - `/api/events`, `/api/events/:id`: booking CRUD
///
/// Unknown paths answer 404 with the usual JSON error body. CORS allows any
/// origin so a browser front end on another host can call the API.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .layer(cors)
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn route_not_found(uri: Uri) -> AppError {
    AppError::new(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
        "NOT_FOUND",
    )
}
