//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to store a URL or a text snippet under a short code.
///
/// Blank `content` passes validation here and is rejected by the link
/// service with a specific message.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// URL or free text, at most 100 000 characters.
    #[validate(length(max = 100000, message = "Content is too long"))]
    pub content: String,

    /// Optional custom short code; blank means "generate one".
    #[validate(length(max = 64, message = "Custom code is too long"))]
    pub custom_code: Option<String>,

    /// Expiration class (`never`, `10m`, `30m`, `1h`, `24h`, `7d`, `30d`).
    /// Unknown values mean `never`.
    pub expiration: Option<String>,

    /// Always serve the content as plain text.
    pub raw_display: Option<bool>,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub success: bool,
    pub short_url: String,
    pub short_code: String,
}
