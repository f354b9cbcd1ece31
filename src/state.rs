use std::sync::Arc;

use crate::domain::repositories::UrlRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub urls: Arc<dyn UrlRepository>,
    /// Base URL prefixed to codes when building `short_url` responses.
    pub base_url: String,
    /// Length of generated short codes.
    pub code_length: usize,
}
