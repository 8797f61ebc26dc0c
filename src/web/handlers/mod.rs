//! HTML template rendering handlers.

use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

pub mod content;
mod home;
mod session;
mod stats;

pub use home::{home_handler, root_handler};
pub use session::{logout_handler, validate_handler};
pub use stats::stats_handler;

/// `302 Found` to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
