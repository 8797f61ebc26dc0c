//! Statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::api::middleware::session::has_valid_session;
use crate::domain::entities::LiveLink;
use crate::error::AppError;
use crate::state::AppState;

use super::session::ValidateTemplate;

/// One table row of the stats page.
pub struct StatsRow {
    pub code: String,
    pub content: String,
    /// Rendered as a hyperlink; only http(s) URLs qualify.
    pub linkable: bool,
    pub raw_display: bool,
    pub clicks: u64,
    pub created_at: String,
    pub expires_at: String,
}

fn format_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

impl From<LiveLink> for StatsRow {
    fn from(link: LiveLink) -> Self {
        let linkable = link.record.is_url
            && (link.record.content.starts_with("http://")
                || link.record.content.starts_with("https://"));

        Self {
            code: link.code,
            content: link.record.content,
            linkable,
            raw_display: link.record.raw_display,
            clicks: link.record.clicks,
            created_at: format_time(link.record.created_at),
            expires_at: link
                .record
                .expires_at
                .map(format_time)
                .unwrap_or_else(|| "never".to_string()),
        }
    }
}

/// Template for the statistics page.
///
/// Renders `templates/stats.html` with:
/// - Table of live links with click counts
/// - Delete buttons calling `DELETE /api/delete/{code}`
/// - Logout button
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub rows: Vec<StatsRow>,
    pub total_clicks: u64,
}

/// Renders the statistics page, or the password page without a session.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Errors
///
/// Returns 500 if the links cannot be listed.
pub async fn stats_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if !has_valid_session(&state, &headers) {
        return Ok(ValidateTemplate::default().into_response());
    }

    let links = state.link_service.list_live().await?;
    let total_clicks = links.iter().map(|l| l.record.clicks).sum();

    Ok(StatsTemplate {
        rows: links.into_iter().map(StatsRow::from).collect(),
        total_clicks,
    }
    .into_response())
}
