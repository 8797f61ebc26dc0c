//! Link lifecycle service: create, resolve, delete and list short links.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::link_index::{INDEX_KEY, LinkIndex};
use crate::domain::clock::Clock;
use crate::domain::entities::{CreatedLink, LinkRecord, LiveLink, NewLink, ResolvedView};
use crate::domain::error::LinkError;
use crate::domain::store::{KvStore, get_json, put_json};
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, generate_code, is_reserved_code, validate_custom_code,
};

/// Attempts at drawing an unused random code before settling for the last one.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service owning the lifecycle of short links.
///
/// All state lives in the store. Records are keyed by their short code and
/// every live code is also listed in the [`LinkIndex`].
///
/// # Consistency
///
/// The store offers single-key operations only, so:
/// - the click counter is a read-increment-write and concurrent resolutions
///   of the same code may under-count
/// - record and index updates are separate writes; index maintenance failures
///   are logged and never fail the primary operation
/// - expiry is enforced lazily, when a record is observed by
///   [`Self::resolve`] or [`Self::list_live`]
pub struct LinkService<S: KvStore + ?Sized> {
    store: Arc<S>,
    index: LinkIndex<S>,
    clock: Arc<dyn Clock>,
    code_length: usize,
    /// Route segments owned by the deployment, on top of the built-in ones.
    reserved: Vec<String>,
}

impl<S: KvStore + ?Sized> LinkService<S> {
    /// Creates a new link service generating codes of the default length.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            index: LinkIndex::new(store.clone(), clock.clone()),
            store,
            clock,
            code_length: DEFAULT_CODE_LENGTH,
            reserved: Vec::new(),
        }
    }

    /// Overrides the length of generated codes.
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Reserves extra path segments, such as the configured home path.
    ///
    /// Reserved segments are refused as custom codes and never generated.
    pub fn with_reserved<I, T>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.reserved.extend(segments.into_iter().map(Into::into));
        self
    }

    /// Access to the underlying index.
    pub fn index(&self) -> &LinkIndex<S> {
        &self.index
    }

    /// Stores a new link and registers it in the index.
    ///
    /// # Code Selection
    ///
    /// - A non-blank `custom_code` is trimmed, validated and must be unused
    /// - Otherwise random codes are drawn until an unused one is found, at most
    ///   10 times; if every draw collides the last code is used anyway
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidInput`] if the content is blank or the
    /// custom code is invalid.
    /// Returns [`LinkError::CodeTaken`] if the custom code is in use.
    /// Returns [`LinkError::Store`] if the record cannot be read or written.
    pub async fn create(&self, new_link: NewLink) -> Result<CreatedLink, LinkError> {
        if new_link.content.trim().is_empty() {
            return Err(LinkError::invalid_input("Content cannot be empty"));
        }

        let custom_code = new_link
            .custom_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let code = match custom_code {
            Some(custom) => {
                validate_custom_code(custom)?;
                if self.is_reserved(custom) {
                    return Err(LinkError::invalid_input("This code is reserved"));
                }
                if self.store.get(custom).await?.is_some() {
                    return Err(LinkError::CodeTaken(custom.to_string()));
                }
                custom.to_string()
            }
            None => self.generate_unused_code().await?,
        };

        let now = self.clock.now();
        let record = LinkRecord::new(
            &new_link.content,
            new_link.raw_display,
            now,
            new_link.expiration.expires_at(now),
        );

        self.persist(&code, &record).await?;
        self.index.add(&code).await;

        info!(
            code = %code,
            is_url = record.is_url,
            expiration = %new_link.expiration,
            "Short link created"
        );

        Ok(CreatedLink { code, record })
    }

    /// Looks up a link and counts the visit.
    ///
    /// # Behavior
    ///
    /// - Unknown code: [`LinkError::NotFound`]
    /// - Expired link: the record and its index entry are removed, then
    ///   [`LinkError::Gone`] is returned
    /// - Otherwise `clicks` is incremented and the record is written back with
    ///   a TTL recomputed from its original `expires_at`
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Store`] on store failures.
    pub async fn resolve(&self, code: &str) -> Result<ResolvedView, LinkError> {
        let mut record = self
            .load(code)
            .await?
            .ok_or_else(|| LinkError::NotFound(code.to_string()))?;

        let now = self.clock.now();
        if record.is_expired_at(now) {
            self.store.delete(code).await?;
            self.index.remove(code).await;
            info!(code, "Expired short link purged on access");
            return Err(LinkError::Gone(code.to_string()));
        }

        record.clicks = record.clicks.saturating_add(1);
        self.persist(code, &record).await?;
        debug!(code, clicks = record.clicks, "Short link resolved");

        Ok(record.view(code))
    }

    /// Deletes a link and drops it from the index.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no record exists for `code`.
    /// Returns [`LinkError::Store`] if the record cannot be read or deleted.
    pub async fn delete(&self, code: &str) -> Result<(), LinkError> {
        if self.load(code).await?.is_none() {
            return Err(LinkError::NotFound(code.to_string()));
        }

        self.store.delete(code).await?;
        self.index.remove(code).await;
        info!(code, "Short link deleted");

        Ok(())
    }

    /// Lists all live links in index order.
    ///
    /// Also reconciles the index (see [`LinkIndex::enumerate`]).
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Store`] if the index or a record cannot be read.
    pub async fn list_live(&self) -> Result<Vec<LiveLink>, LinkError> {
        Ok(self.index.enumerate().await?)
    }

    fn is_reserved(&self, code: &str) -> bool {
        is_reserved_code(code)
            || self
                .reserved
                .iter()
                .any(|segment| segment.eq_ignore_ascii_case(code))
    }

    /// Draws a random code that does not shadow a route.
    fn draw_code(&self) -> String {
        loop {
            let code = generate_code(self.code_length);
            if !self.is_reserved(&code) {
                return code;
            }
            debug!(code = %code, "Generated code is reserved, redrawing");
        }
    }

    /// Reads the record stored under `code`.
    ///
    /// The index key is never treated as a link.
    async fn load(&self, code: &str) -> Result<Option<LinkRecord>, LinkError> {
        if code == INDEX_KEY {
            return Ok(None);
        }
        Ok(get_json(&*self.store, code).await?)
    }

    async fn persist(&self, code: &str, record: &LinkRecord) -> Result<(), LinkError> {
        let ttl = record.remaining_ttl(self.clock.now());
        put_json(&*self.store, code, record, ttl).await?;
        Ok(())
    }

    /// Draws random codes until one is unused in the store.
    ///
    /// Reserved draws are discarded without counting as an attempt.
    ///
    /// Gives up after [`MAX_GENERATION_ATTEMPTS`] and returns the last draw.
    async fn generate_unused_code(&self) -> Result<String, LinkError> {
        let mut code = self.draw_code();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            if self.store.get(&code).await?.is_none() {
                return Ok(code);
            }
            debug!(code = %code, attempt, "Generated code collides, retrying");
            code = self.draw_code();
        }

        warn!(
            code = %code,
            attempts = MAX_GENERATION_ATTEMPTS,
            "Could not find an unused code, using the last one drawn"
        );
        Ok(code)
    }
}
