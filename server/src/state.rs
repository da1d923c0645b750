use std::sync::Arc;

use crate::config::ContactConfig;
use crate::store::ContentStore;

/// Shared application state passed to all handlers via axum State extractor.
#[derive(Clone)]
pub struct AppState {
    /// The one content store for the life of the process
    pub store: Arc<ContentStore>,
    /// Contact form rate limiting
    pub contact: ContactConfig,
}

impl AppState {
    pub fn new(store: ContentStore, contact: ContactConfig) -> Self {
        Self {
            store: Arc::new(store),
            contact,
        }
    }
}
