//! Redis-backed link store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::domain::repositories::{LinkStore, StoreError, StoreResult};

/// Link store using Redis `SET EX`, `GET` and `DEL`.
///
/// Uses a `ConnectionManager`, which reconnects on its own and is cheap to clone
/// per call. Every command is a single attempt; failures are returned to the
/// caller as [`StoreError::Backend`].
pub struct RedisLinkStore {
    conn: ConnectionManager,
    ttl: Duration,
    key_prefix: String,
}

impl RedisLinkStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `ttl` - Expiry applied to every saved record
    /// - `key_prefix` - Namespace prepended to every short code
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl: Duration, key_prefix: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Backend(format!("Failed to create Redis client: {}", e))
        })?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            conn,
            ttl,
            key_prefix: key_prefix.to_string(),
        };

        store.ping().await?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    fn build_key(&self, code: &str) -> String {
        build_key(&self.key_prefix, code)
    }
}

/// Constructs the full Redis key with namespace prefix.
fn build_key(prefix: &str, code: &str) -> String {
    format!("{}{}", prefix, code)
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn save(&self, code: &str, original_url: &str) -> StoreResult<()> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();
        let start = Instant::now();

        match conn
            .set_ex::<_, _, ()>(&key, original_url, self.ttl.as_secs())
            .await
        {
            Ok(()) => {
                debug!(
                    code,
                    original_url,
                    ttl_secs = self.ttl.as_secs(),
                    elapsed_ms = elapsed_ms(start),
                    "Redis SET"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    code,
                    original_url,
                    error = %e,
                    elapsed_ms = elapsed_ms(start),
                    "Redis SET failed"
                );
                Err(e.into())
            }
        }
    }

    async fn get(&self, code: &str) -> StoreResult<String> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();
        let start = Instant::now();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!(code, original_url = %url, elapsed_ms = elapsed_ms(start), "Redis GET hit");
                Ok(url)
            }
            Ok(None) => {
                debug!(code, elapsed_ms = elapsed_ms(start), "Redis GET miss");
                Err(StoreError::NotFound {
                    code: code.to_string(),
                })
            }
            Err(e) => {
                error!(code, error = %e, elapsed_ms = elapsed_ms(start), "Redis GET failed");
                Err(e.into())
            }
        }
    }

    async fn delete(&self, code: &str) -> StoreResult<()> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();
        let start = Instant::now();

        match conn.del::<_, i64>(&key).await {
            Ok(0) => {
                warn!(code, elapsed_ms = elapsed_ms(start), "Redis DEL removed nothing");
                Err(StoreError::NotFound {
                    code: code.to_string(),
                })
            }
            Ok(_) => {
                debug!(code, elapsed_ms = elapsed_ms(start), "Redis DEL");
                Ok(())
            }
            Err(e) => {
                error!(code, error = %e, elapsed_ms = elapsed_ms(start), "Redis DEL failed");
                Err(e.into())
            }
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Backend(format!("Redis PING failed: {}", e)))
    }
}
