//! Application state for Axum handlers.

use event_space_core::EventStore;
use std::sync::Arc;

/// State shared by every handler.
///
/// The store sits behind a trait object so the same router serves
/// `PostgreSQL` in production and the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    /// Event persistence.
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
