//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Redirect to the create form
//! - `GET  /u`           - Create form (path configurable via `HOME_PATH`)
//! - `GET  /{code}`      - Resolve a short code (public)
//! - `GET  /health`      - Health check: store (public)
//! - `GET  /stats`       - Statistics page (stats session required)
//! - `POST /validate`    - Open a stats session
//! - `POST /logout`      - Close the stats session
//! - `/api/*`            - JSON API (CORS enabled)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin on `/api`
//! - **Session** - Signed cookie for the stats views
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware except path normalization.
///
/// Static routes take precedence over `/{code}`, so built-in paths can never
/// be shadowed by a short code.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes(&state.home_path))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes(state.clone()))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
