//! Router configuration for the Warren API.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, list_threads, report_reply,
    report_thread, show_thread, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route(
            "/threads/:board",
            post(create_thread)
                .get(list_threads)
                .put(report_thread)
                .delete(delete_thread),
        )
        .route(
            "/replies/:board",
            post(create_reply)
                .get(show_thread)
                .put(report_reply)
                .delete(delete_reply),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
