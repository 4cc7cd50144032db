//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::MovieRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog repository; owns all movie data and its locking
    pub repository: Arc<dyn MovieRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }
}
