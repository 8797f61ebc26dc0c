//! Handler for the live link listing.

use axum::{Json, extract::State};

use crate::api::dto::links::LinksResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every live link.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Authentication
///
/// Requires a valid stats session cookie, see
/// [`crate::api::middleware::session`].
///
/// Enumerating also purges expired links and rewrites the index.
pub async fn links_handler(State(state): State<AppState>) -> Result<Json<LinksResponse>, AppError> {
    let links = state.link_service.list_live().await?;

    Ok(Json(LinksResponse {
        success: true,
        total: links.len(),
        links,
    }))
}
