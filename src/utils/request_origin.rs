//! Origin extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Header set by reverse proxies that terminate TLS.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the public origin (`scheme://host[:port]`) of the current request.
///
/// The host comes from the `Host` header and is kept verbatim, port included.
/// The scheme comes from the first value of `X-Forwarded-Proto` when present,
/// otherwise `http` is assumed.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com".parse().unwrap());
/// headers.insert("x-forwarded-proto", "https".parse().unwrap());
///
/// assert_eq!(request_origin(&headers).unwrap(), "https://s.example.com");
/// ```
pub fn request_origin(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Missing Host header",
            serde_json::json!({}),
        ));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| *v == "http" || *v == "https")
        .unwrap_or("http");

    Ok(format!("{}://{}", scheme, host))
}

/// Joins an origin (or configured base URL) and a short code.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_origin_defaults_to_http() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(request_origin(&headers).unwrap(), "http://localhost:3000");
    }

    #[test]
    fn test_origin_honours_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https, http"));

        assert_eq!(request_origin(&headers).unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_origin_ignores_unknown_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        assert_eq!(request_origin(&headers).unwrap(), "http://s.example.com");
    }

    #[test]
    fn test_origin_missing_host() {
        let headers = HeaderMap::new();
        let result = request_origin(&headers);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_origin_ipv6_host_kept_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        assert_eq!(request_origin(&headers).unwrap(), "http://[::1]:8080");
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        assert_eq!(short_url("https://s.example.com/", "abc"), "https://s.example.com/abc");
        assert_eq!(short_url("https://s.example.com", "abc"), "https://s.example.com/abc");
    }
}
