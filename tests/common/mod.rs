#![allow(dead_code)]

use std::sync::Arc;
use tinylink::domain::repositories::UrlRepository;
use tinylink::infrastructure::persistence::MemoryUrlRepository;
use tinylink::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:5000";

pub fn create_test_state() -> AppState {
    AppState {
        urls: Arc::new(MemoryUrlRepository::new()),
        base_url: TEST_BASE_URL.to_string(),
        code_length: 6,
    }
}

pub async fn seed_link(state: &AppState, code: &str, url: &str) {
    state.urls.insert(code, url).await.unwrap();
}
