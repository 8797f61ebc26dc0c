//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    home_handler, logout_handler, root_handler, stats_handler, validate_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`            - Redirect to the create form
/// - `GET  {home_path}`  - Create form
/// - `GET  /stats`       - Link statistics (password page without a session)
/// - `POST /validate`    - Check the stats password, set the session cookie
/// - `POST /logout`      - Clear the session cookie
pub fn routes(home_path: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route(home_path, get(home_handler))
        .route("/stats", get(stats_handler))
        .route("/validate", post(validate_handler))
        .route("/logout", post(logout_handler))
}
