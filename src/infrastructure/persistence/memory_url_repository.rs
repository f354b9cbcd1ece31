//! In-memory implementation of [`UrlRepository`].

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local URL store backed by a `HashMap`.
///
/// Entries live for the lifetime of the process and are lost on restart.
/// Nothing is ever evicted or deleted. Concurrent readers proceed in
/// parallel; writers take the lock exclusively.
#[derive(Default)]
pub struct MemoryUrlRepository {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, code: &str, long_url: &str) -> Result<(), AppError> {
        self.entries
            .write()
            .await
            .insert(code.to_string(), long_url.to_string());
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(code).cloned())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.entries.read().await.len())
    }
}
