//! Handler for link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use validator::Validate;

use crate::api::dto::create::{CreateLinkRequest, CreateLinkResponse};
use crate::domain::entities::{Expiration, NewLink};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{request_origin, short_url};

/// Stores a URL or text snippet under a new short code.
///
/// # Endpoint
///
/// `POST /api/create`
///
/// # Request Body
///
/// ```json
/// {
///   "content": "https://example.com/some/long/path",
///   "customCode": "my-link",     // optional
///   "expiration": "24h",         // optional, default "never"
///   "rawDisplay": false          // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "shortUrl": "https://s.example.com/my-link",
///   "shortCode": "my-link"
/// }
/// ```
///
/// The short URL is built from `PUBLIC_BASE_URL` when configured, otherwise
/// from the request origin.
///
/// # Errors
///
/// - 400 Bad Request: malformed JSON, blank content, invalid custom code
/// - 409 Conflict: custom code already taken
/// - 500 Internal Server Error: store failure
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let base_url = match state.public_base_url {
        Some(ref base) => base.clone(),
        None => request_origin(&headers)?,
    };

    let mut new_link = NewLink::new(payload.content)
        .with_expiration(Expiration::from_class(payload.expiration.as_deref()))
        .with_raw_display(payload.raw_display.unwrap_or(false));
    if let Some(custom_code) = payload.custom_code {
        new_link = new_link.with_custom_code(custom_code);
    }

    let created = state.link_service.create(new_link).await?;

    Ok(Json(CreateLinkResponse {
        success: true,
        short_url: short_url(&base_url, &created.code),
        short_code: created.code,
    }))
}
