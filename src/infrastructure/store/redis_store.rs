//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::store::KvStore;

/// [`KvStore`] on top of a Redis server.
///
/// Uses `ConnectionManager` for automatic reconnection; it is cloned per call.
/// Every key is namespaced with `key_prefix`. Unlike a cache, this is the
/// primary store: errors propagate to callers.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `key_prefix` - namespace prepended to every key (e.g., `"kvs:"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

fn operation_error(op: &str, key: &str, e: redis::RedisError) -> StoreError {
    error!(key, error = %e, "Redis {} failed", op);
    StoreError::Operation(format!("{} {}: {}", op, key, e))
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| operation_error("GET", key, e))?;
        debug!(key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> StoreResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match ttl_seconds {
            Some(ttl) => conn
                .set_ex::<_, _, ()>(&full_key, value, ttl.max(1))
                .await
                .map_err(|e| operation_error("SETEX", key, e))?,
            None => conn
                .set::<_, _, ()>(&full_key, value)
                .await
                .map_err(|e| operation_error("SET", key, e))?,
        }

        debug!(key, ttl = ?ttl_seconds, "Redis SET");
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let deleted = conn
            .del::<_, i32>(&full_key)
            .await
            .map_err(|e| operation_error("DEL", key, e))?;
        debug!(key, deleted, "Redis DEL");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
