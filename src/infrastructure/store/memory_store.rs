//! In-process link store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError, StoreResult};

/// A link store kept in a process-local map.
///
/// Mirrors the Redis semantics: saves overwrite, expired records read as
/// missing, and delete reports whether a live record was removed. Expired
/// entries are swept on every save and dropped when read.
///
/// # Use Cases
///
/// - Handler and service tests
/// - Local development without Redis (`STORE_BACKEND=memory`)
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, Link>>,
    ttl: chrono::Duration,
}

impl MemoryLinkStore {
    /// Creates an empty store whose records expire after `ttl`.
    pub fn new(ttl: std::time::Duration) -> Self {
        debug!("Using MemoryLinkStore");
        Self {
            links: RwLock::new(HashMap::new()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::days(36_500)),
        }
    }

    /// Number of live records.
    pub async fn len(&self) -> usize {
        self.links
            .read()
            .await
            .values()
            .filter(|link| !link.is_expired())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes `code` if it is still expired under the write lock.
    ///
    /// Returns the URL instead when a save replaced the record after the
    /// caller's read.
    async fn evict_expired(&self, code: &str) -> Option<String> {
        let mut links = self.links.write().await;
        match links.get(code) {
            Some(link) if !link.is_expired() => Some(link.original_url.clone()),
            Some(_) => {
                links.remove(code);
                None
            }
            None => None,
        }
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn save(&self, code: &str, original_url: &str) -> StoreResult<()> {
        let link = Link::new(code.to_string(), original_url.to_string(), self.ttl);

        let mut links = self.links.write().await;
        links.retain(|_, existing| !existing.is_expired());
        links.insert(code.to_string(), link);

        Ok(())
    }

    async fn get(&self, code: &str) -> StoreResult<String> {
        let not_found = || StoreError::NotFound {
            code: code.to_string(),
        };

        {
            let links = self.links.read().await;
            match links.get(code) {
                Some(link) if !link.is_expired() => return Ok(link.original_url.clone()),
                Some(_) => {}
                None => return Err(not_found()),
            }
        }

        self.evict_expired(code).await.ok_or_else(not_found)
    }

    async fn delete(&self, code: &str) -> StoreResult<()> {
        match self.links.write().await.remove(code) {
            Some(link) if !link.is_expired() => Ok(()),
            _ => Err(StoreError::NotFound {
                code: code.to_string(),
            }),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
