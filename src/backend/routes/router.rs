/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Index route (`GET /`)
 * 2. API routes (auth, blog posts)
 * 3. Fallback handler (404)
 *
 * Every request is traced through `tower_http::trace::TraceLayer`.
 */

use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Body of the index route
pub const WELCOME_MESSAGE: &str = "Welcome! Please follow README.md";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(|| async { WELCOME_MESSAGE }));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { StatusCode::NOT_FOUND });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
