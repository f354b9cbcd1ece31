//! Repository trait for short URL data access.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short code to URL mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process
///   `HashMap` implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a mapping from `code` to `long_url`.
    ///
    /// The insert is unconditional: an existing entry under the same code is
    /// overwritten (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn insert(&self, code: &str, long_url: &str) -> Result<(), AppError>;

    /// Looks up the original URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the code is known
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn find_by_code(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Counts stored entries. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn count(&self) -> Result<usize, AppError>;
}
