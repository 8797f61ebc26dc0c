//! Secondary index of known short codes.
//!
//! The store cannot list its keys, so the codes of all links are kept as a
//! JSON array under [`INDEX_KEY`]. Every mutation is a whole-list
//! read-modify-write without any concurrency token: two concurrent writers
//! can lose each other's update. The index is therefore only an
//! approximation of the live set. [`LinkIndex::enumerate`] reconciles it with
//! the actual records and rewrites it, which heals stale entries left behind
//! by interrupted deletes.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{LinkRecord, LiveLink};
use crate::domain::error::StoreResult;
use crate::domain::store::{KvStore, put_json};

/// Reserved store key holding the index. User codes can never start with `_`.
pub const INDEX_KEY: &str = "__index__";

/// Maintains the list of known codes on top of a [`KvStore`].
pub struct LinkIndex<S: KvStore + ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: KvStore + ?Sized> LinkIndex<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Reads the current list of codes.
    ///
    /// A missing or undecodable index reads as empty.
    ///
    /// # Errors
    ///
    /// Propagates store I/O failures.
    pub async fn codes(&self) -> StoreResult<Vec<String>> {
        let Some(raw) = self.store.get(INDEX_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(codes) => Ok(codes),
            Err(e) => {
                warn!(error = %e, "Index value is not a JSON string array, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, codes: &[String]) -> StoreResult<()> {
        put_json(&*self.store, INDEX_KEY, &codes, None).await
    }

    /// Appends `code` unless already present.
    ///
    /// Failures are logged and swallowed; index drift is tolerated.
    pub async fn add(&self, code: &str) {
        if let Err(e) = self.try_add(code).await {
            warn!(code, error = %e, "Failed to add code to index");
        }
    }

    async fn try_add(&self, code: &str) -> StoreResult<()> {
        let mut codes = self.codes().await?;
        if codes.iter().any(|c| c == code) {
            return Ok(());
        }
        codes.push(code.to_string());
        self.write(&codes).await?;
        debug!(code, size = codes.len(), "Code added to index");
        Ok(())
    }

    /// Removes `code` if present.
    ///
    /// Failures are logged and swallowed; a stale entry is dropped by the next
    /// [`Self::enumerate`].
    pub async fn remove(&self, code: &str) {
        if let Err(e) = self.try_remove(code).await {
            warn!(code, error = %e, "Failed to remove code from index");
        }
    }

    async fn try_remove(&self, code: &str) -> StoreResult<()> {
        let mut codes = self.codes().await?;
        codes.retain(|c| c != code);
        self.write(&codes).await?;
        debug!(code, size = codes.len(), "Code removed from index");
        Ok(())
    }

    /// Lists every live link in index order and rewrites the index to match.
    ///
    /// For each indexed code the record is fetched:
    /// - missing or undecodable records are dropped from the index
    /// - expired records are deleted from the store and dropped
    /// - live records are returned
    ///
    /// Costs one store round-trip per indexed code.
    ///
    /// # Errors
    ///
    /// Propagates failures reading the index or a record. Failures deleting an
    /// expired record or writing the reconciled index are logged only.
    pub async fn enumerate(&self) -> StoreResult<Vec<LiveLink>> {
        let codes = self.codes().await?;
        let now = self.clock.now();

        let mut live = Vec::with_capacity(codes.len());
        let mut kept = Vec::with_capacity(codes.len());

        for code in codes {
            let Some(raw) = self.store.get(&code).await? else {
                debug!(code = %code, "Dropping dangling index entry");
                continue;
            };

            let record = match serde_json::from_str::<LinkRecord>(&raw) {
                Ok(record) => record,
                Err(e) => {
                    warn!(code = %code, error = %e, "Dropping index entry with undecodable record");
                    continue;
                }
            };

            if record.is_expired_at(now) {
                if let Err(e) = self.store.delete(&code).await {
                    warn!(code = %code, error = %e, "Failed to delete expired link");
                }
                debug!(code = %code, "Purged expired link during enumeration");
                continue;
            }

            kept.push(code.clone());
            live.push(LiveLink { code, record });
        }

        if let Err(e) = self.write(&kept).await {
            warn!(error = %e, "Failed to write reconciled index");
        }

        Ok(live)
    }
}
