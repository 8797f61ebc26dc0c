//! Key-value store contract.

use crate::domain::error::StoreResult;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// A durable string-to-string mapping with optional per-key TTL.
///
/// Every call is a single-key operation. There are no multi-key transactions,
/// no atomic increments and no key listing, so anything built on top of this
/// trait has to tolerate read-modify-write races.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed production store
/// - [`crate::infrastructure::store::MemoryStore`] - In-process store for development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key does not exist or its TTL has elapsed.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// With `ttl_seconds = Some(n)` the key disappears after `n` seconds;
    /// with `None` it never expires (any earlier TTL is cleared).
    async fn put(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> StoreResult<()>;

    /// Removes `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}

/// Reads and decodes a JSON value.
///
/// # Errors
///
/// Returns [`crate::domain::error::StoreError::Serialization`] if the stored
/// value is not valid JSON for `T`.
pub async fn get_json<S, T>(store: &S, key: &str) -> StoreResult<Option<T>>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and writes it.
pub async fn put_json<S, T>(
    store: &S,
    key: &str,
    value: &T,
    ttl_seconds: Option<u64>,
) -> StoreResult<()>
where
    S: KvStore + ?Sized,
    T: Serialize + Sync,
{
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw, ttl_seconds).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StoreError;

    #[tokio::test]
    async fn test_get_json_decodes_value() {
        let mut store = MockKvStore::new();
        store
            .expect_get()
            .withf(|key| key == "list")
            .times(1)
            .returning(|_| Ok(Some(r#"["a","b"]"#.to_string())));

        let value: Option<Vec<String>> = get_json(&store, "list").await.unwrap();
        assert_eq!(value, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[tokio::test]
    async fn test_get_json_missing_key() {
        let mut store = MockKvStore::new();
        store.expect_get().returning(|_| Ok(None));

        let value: Option<Vec<String>> = get_json(&store, "list").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_get_json_rejects_garbage() {
        let mut store = MockKvStore::new();
        store
            .expect_get()
            .returning(|_| Ok(Some("not json".to_string())));

        let result: StoreResult<Option<Vec<String>>> = get_json(&store, "list").await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_put_json_passes_ttl_through() {
        let mut store = MockKvStore::new();
        store
            .expect_put()
            .withf(|key, value, ttl| key == "k" && value == r#"[1,2]"# && *ttl == Some(30))
            .times(1)
            .returning(|_, _, _| Ok(()));

        put_json(&store, "k", &vec![1, 2], Some(30)).await.unwrap();
    }
}
