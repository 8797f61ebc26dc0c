//! Create form page and root redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse, response::Response};

use crate::domain::entities::Expiration;
use crate::state::AppState;

use super::found;

/// Template for the link creation form.
///
/// Renders `templates/home.html`. The form posts JSON to `/api/create`.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Expiration classes offered in the select box, `never` first.
    pub expirations: Vec<&'static str>,
}

/// Renders the create form.
///
/// # Endpoint
///
/// `GET {HOME_PATH}` (default `/u`)
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {
        expirations: Expiration::ALL.iter().map(Expiration::as_str).collect(),
    }
}

/// Sends visitors of `/` to the create form.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> Response {
    found(&state.home_path)
}
