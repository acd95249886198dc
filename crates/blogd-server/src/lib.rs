// ABOUTME: HTTP server for blogd, exposing blog CRUD over a REST API.
// ABOUTME: Uses Axum with a shared SQLite store scoped per request via mutex guard.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{BlogdConfig, ConfigError};
pub use routes::create_router;
