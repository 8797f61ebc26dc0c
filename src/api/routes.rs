//! API route configuration.

use crate::api::handlers::{create_handler, delete_handler, links_handler};
use crate::api::middleware::{cors, session};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

/// All API routes, served under `/api` with a permissive CORS policy.
///
/// # Endpoints
///
/// - `POST   /create`         - Create a short link
/// - `DELETE /delete/{code}`  - Delete a short link
/// - `GET    /links`          - List live links (stats session required)
pub fn routes(state: AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/links", get(links_handler))
        .route_layer(middleware::from_fn_with_state(state, session::layer));

    Router::new()
        .route("/create", post(create_handler))
        .route("/delete/{code}", delete(delete_handler))
        .merge(gated)
        .layer(cors::layer())
}
