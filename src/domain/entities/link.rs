//! Link entity representing a stored URL or text snippet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::entities::Expiration;

/// A short link as persisted in the key-value store.
///
/// Serialized as camelCase JSON:
/// `{content, isUrl, rawDisplay, createdAt, clicks, expiresAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub content: String,
    pub is_url: bool,
    #[serde(default)]
    pub raw_display: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl LinkRecord {
    /// Builds a fresh record with zero clicks.
    ///
    /// `content` is trimmed and classified as a URL once, here; the flag is
    /// never recomputed afterwards.
    pub fn new(
        content: &str,
        raw_display: bool,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        let content = content.trim().to_string();
        let is_url = is_absolute_url(&content);

        Self {
            content,
            is_url,
            raw_display,
            created_at,
            clicks: 0,
            expires_at,
        }
    }

    /// Returns true if the record is dead at `now`.
    ///
    /// A link expiring exactly at `now` is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }

    /// Store TTL for this record written at `now`.
    ///
    /// Whole seconds until `expires_at`, rounded down and clamped to at least
    /// one second. `None` for links that never expire.
    pub fn remaining_ttl(&self, now: DateTime<Utc>) -> Option<u64> {
        self.expires_at
            .map(|e| (e - now).num_seconds().max(1) as u64)
    }

    /// Decides how a successful lookup of this record is presented.
    pub fn view(&self, code: &str) -> ResolvedView {
        if self.raw_display {
            return ResolvedView::RawText {
                content: self.content.clone(),
            };
        }

        if self.is_url {
            // Serialize through the parser so the Location header is ASCII.
            let location = Url::parse(&self.content)
                .map(String::from)
                .unwrap_or_else(|_| self.content.clone());
            return ResolvedView::Redirect { location };
        }

        ResolvedView::Formatted {
            code: code.to_string(),
            content: self.content.clone(),
            clicks: self.clicks,
        }
    }
}

fn is_absolute_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView {
    /// Redirect the client to `location`.
    Redirect { location: String },
    /// Return `content` verbatim as plain text.
    RawText { content: String },
    /// Render the content page.
    Formatted {
        code: String,
        content: String,
        clicks: u64,
    },
}

/// A live record together with its short code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveLink {
    #[serde(rename = "shortCode")]
    pub code: String,
    #[serde(flatten)]
    pub record: LinkRecord,
}

/// Input data for creating a new link.
#[derive(Debug, Clone, Default)]
pub struct NewLink {
    pub content: String,
    pub custom_code: Option<String>,
    pub expiration: Expiration,
    pub raw_display: bool,
}

impl NewLink {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    pub fn with_expiration(mut self, expiration: Expiration) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_raw_display(mut self, raw_display: bool) -> Self {
        self.raw_display = raw_display;
        self
    }
}

/// A freshly stored link.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub code: String,
    pub record: LinkRecord,
}
