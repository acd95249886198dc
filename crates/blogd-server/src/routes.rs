// ABOUTME: Route definitions for the blogd HTTP API.
// ABOUTME: Assembles the blog CRUD routes into a single Axum Router with shared state.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/blog", get(api::blogs::list_blogs).post(api::blogs::create_blog))
        .route(
            "/blog/{id}",
            get(api::blogs::get_blog).delete(api::blogs::delete_blog),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
