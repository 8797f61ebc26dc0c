//! CORS policy for the JSON API.

use axum::http::{Method, header::CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allows any origin to call the API, without credentials.
///
/// Answers preflight requests for the methods the API exposes.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
