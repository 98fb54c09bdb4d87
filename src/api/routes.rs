//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{api_hello, health, hello, root, test, version, AppState};
use super::middleware::track_requests;

/// Create the API router.
///
/// Every route, including 404/405 responses, passes through request tracing,
/// request metrics and a permissive CORS policy.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Greetings
        .route("/hello", get(hello))
        .route("/api/hello", get(api_hello))
        // Service info
        .route("/version", get(version))
        .route("/health", get(health))
        .route("/test", get(test))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(track_requests))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
