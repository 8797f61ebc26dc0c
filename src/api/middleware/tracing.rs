//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Span, field, info_span};

/// Route template of short link lookups.
const RESOLVE_ROUTE: &str = "/{code}";

pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span>;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates an `INFO` span with:
///   - HTTP method
///   - Request path (query string left out, it may carry user content)
///   - Matched route template, `-` when nothing matched
///   - Short code, on lookups through `/{code}`
///
/// **On Response:**
/// - Logs at `INFO` level with status code and latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/api/create route=/api/create}: finished processing request latency=12 ms status=200
/// INFO request{method=GET path=/abc123 route=/{code} code=abc123}: finished processing request latency=3 ms status=302
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(request_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(tracing::Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    let path = request.uri().path();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("-");

    let span = info_span!(
        "request",
        method = %request.method(),
        path,
        route,
        code = field::Empty,
    );
    if route == RESOLVE_ROUTE {
        span.record("code", path.trim_start_matches('/'));
    }
    span
}
