//! Stats session middleware for gated API endpoints.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};

use crate::application::services::access_service::{SESSION_COOKIE, cookie_value};
use crate::{error::AppError, state::AppState};

/// Returns `true` if the request carries a valid, unexpired stats session.
///
/// Handles multiple cookies in the `Cookie` header; other cookies are ignored.
pub fn has_valid_session(state: &AppState, headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookies| cookie_value(cookies, SESSION_COOKIE))
        .any(|token| state.access_service.verify_session(token))
}

/// Rejects requests without a valid stats session.
///
/// # Cookie Format
///
/// ```text
/// Cookie: stats_session=<expiry>.<signature>
/// ```
///
/// The cookie is issued by `POST /validate`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the cookie is missing, tampered with or expired.
///
/// # Example
///
/// ```rust,ignore
/// let gated = Router::new()
///     .route("/links", get(links_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !has_valid_session(&state, req.headers()) {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Missing or expired stats session"}),
        ));
    }

    Ok(next.run(req).await)
}
