//! Stats password validation and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;

use super::found;

/// Template for the password prompt shown in place of the stats page.
///
/// Renders `templates/validate.html`. The form posts JSON to `/validate`.
#[derive(Template, WebTemplate, Default)]
#[template(path = "validate.html")]
pub struct ValidateTemplate {}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub password: String,
}

/// Checks the stats password and opens a session.
///
/// # Endpoint
///
/// `POST /validate`
///
/// # Request Body
///
/// ```json
/// { "password": "..." }
/// ```
///
/// # Responses
///
/// - **302 Found** to `/stats` with a `stats_session` cookie
/// - **401 Unauthorized** JSON error on a wrong password
/// - **400 Bad Request** on a malformed body
pub async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;

    if !state.access_service.verify_password(&payload.password) {
        warn!("Rejected stats password");
        return Err(AppError::unauthorized(
            "Invalid password",
            serde_json::Value::Null,
        ));
    }

    let token = state.access_service.issue_session();
    info!("Stats session opened");

    Ok((
        [(SET_COOKIE, state.access_service.session_cookie(&token))],
        found("/stats"),
    )
        .into_response())
}

/// Clears the stats session and returns to the create form.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(State(state): State<AppState>) -> Response {
    (
        [(SET_COOKIE, state.access_service.clear_cookie())],
        found(&state.home_path),
    )
        .into_response()
}
