//! Application state shared across request handlers.

use std::sync::Arc;

use utoipa::openapi::OpenApi;

/// Shared state, cloned into each handler through Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// The Discord API document, rendered once at startup.
    pub document: Arc<OpenApi>,
}

impl AppState {
    pub fn new(document: OpenApi) -> Self {
        Self {
            document: Arc::new(document),
        }
    }
}
