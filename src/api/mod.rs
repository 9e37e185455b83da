//! REST API module using Axum
//!
//! Thin HTTP surface over the service layer: every endpoint forwards to a
//! service or generator and wraps the result in the response envelope.

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::AppState;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `FIELDPLAN_CORS_ORIGINS` to a comma-separated list of allowed
/// origins for development (e.g., the frontend dev server).
fn build_cors_layer() -> CorsLayer {
    match std::env::var("FIELDPLAN_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        }
        Err(_) => CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    }
}

/// Create the complete application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes(state))
        .merge(routes::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}
