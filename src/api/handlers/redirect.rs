//! Handler for short code resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::entities::ResolvedView;
use crate::domain::error::LinkError;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::content::ContentTemplate;

/// Resolves a short code and counts the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found** with `Location` for URL links
/// - **200 OK** `text/plain` for raw-display links
/// - **200 OK** HTML content page for text links
/// - **404 Not Found** (plain text) for unknown codes
/// - **410 Gone** (plain text) for expired links, which are purged on the spot
/// - **500** JSON error on store failure
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.resolve(&code).await {
        Ok(ResolvedView::Redirect { location }) => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        Ok(ResolvedView::RawText { content }) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            content,
        )
            .into_response(),
        Ok(ResolvedView::Formatted {
            code,
            content,
            clicks,
        }) => ContentTemplate {
            code,
            content,
            clicks,
            home_path: state.home_path.clone(),
        }
        .into_response(),
        Err(LinkError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Short link not found").into_response()
        }
        Err(LinkError::Gone(_)) => {
            (StatusCode::GONE, "This link has expired and was removed").into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
