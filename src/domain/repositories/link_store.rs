//! Storage contract for short link records.

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by [`LinkStore`] implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The key is absent, expired or was already deleted.
    #[error("short code not found: {code}")]
    NotFound { code: String },

    /// The backend could not be reached or rejected the command.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Backend(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store holding `code -> original_url` with a fixed expiry.
///
/// Each record is a single key, so implementations need no multi-key
/// atomicity. The TTL is a property of the store, applied on every save.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisLinkStore`] - Redis `SET EX` / `GET` / `DEL`
/// - [`crate::infrastructure::store::MemoryLinkStore`] - In-process map for tests and local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Writes the mapping with the store TTL, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend is unavailable.
    async fn save(&self, code: &str, original_url: &str) -> StoreResult<()>;

    /// Returns the URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent or expired.
    async fn get(&self, code: &str) -> StoreResult<String>;

    /// Removes the mapping.
    ///
    /// Absence is detected from the number of removed keys, not a prior lookup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing was removed.
    async fn delete(&self, code: &str) -> StoreResult<()>;

    /// Checks that the backend answers.
    async fn ping(&self) -> StoreResult<()>;
}
