// ABOUTME: Shared application state for the blogd HTTP server.
// ABOUTME: Owns the SQLite store behind a mutex and hands out request-scoped guards.

use std::sync::Arc;

use blogd_store::BlogStore;
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state accessible by all Axum handlers.
/// The store is the only shared mutable resource; each handler takes the
/// lock for the duration of its store work and the guard's drop releases
/// it on every exit path.
pub struct AppState {
    store: Mutex<BlogStore>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState wrapping an opened store.
    pub fn new(store: BlogStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Acquire the request-scoped store handle.
    pub async fn store(&self) -> MutexGuard<'_, BlogStore> {
        self.store.lock().await
    }
}
