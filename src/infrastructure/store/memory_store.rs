//! In-process key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::error::StoreResult;
use crate::domain::store::KvStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// [`KvStore`] kept in a `HashMap` for the lifetime of the process.
///
/// TTLs are enforced lazily against the injected [`Clock`]: an expired entry
/// reads as missing and is evicted on the next write to any key.
/// Nothing survives a restart.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Number of unexpired entries.
    pub async fn len(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .read()
            .await
            .values()
            .filter(|e| !e.is_expired(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;

        Ok(entries
            .get(key)
            .filter(|e| !e.is_expired(now))
            .map(|e| e.value.clone()))
    }

    async fn put(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> StoreResult<()> {
        let now = self.clock.now();
        // A TTL too large to represent never expires.
        let expires_at = ttl_seconds
            .and_then(|ttl| i64::try_from(ttl).ok())
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl));

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired(now));
        if entries.len() < before {
            debug!(evicted = before - entries.len(), "Evicted expired entries");
        }

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
