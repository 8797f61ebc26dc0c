//! HTTP-facing error type.
//!
//! Every API failure is rendered as `{"success": false, "error": "..."}`,
//! optionally with a `details` object.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::error::LinkError;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Gone { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Gone { .. } => StatusCode::GONE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Gone { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::Unauthorized { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Gone { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            success: false,
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<LinkError> for AppError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::InvalidInput(message) => AppError::bad_request(message, Value::Null),
            LinkError::CodeTaken(code) => AppError::conflict(
                "This short code is already taken, please choose another one",
                json!({ "code": code }),
            ),
            LinkError::NotFound(code) => {
                AppError::not_found("Short link not found", json!({ "code": code }))
            }
            LinkError::Gone(code) => AppError::gone(
                "This link has expired and was removed",
                json!({ "code": code }),
            ),
            LinkError::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                AppError::internal("Storage backend error", Value::Null)
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
        AppError::bad_request("Invalid request", json!({ "fields": fields }))
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(e: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StoreError;

    #[test]
    fn test_link_errors_map_to_status_codes() {
        let cases = [
            (LinkError::invalid_input("empty"), StatusCode::BAD_REQUEST),
            (LinkError::CodeTaken("a".into()), StatusCode::CONFLICT),
            (LinkError::NotFound("a".into()), StatusCode::NOT_FOUND),
            (LinkError::Gone("a".into()), StatusCode::GONE),
            (
                LinkError::Store(StoreError::Operation("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_store_error_detail_is_not_exposed() {
        let err = AppError::from(LinkError::Store(StoreError::Connection(
            "redis://:secret@host".into(),
        )));
        assert!(!err.message().contains("secret"));
    }

    #[test]
    fn test_invalid_input_keeps_message() {
        let err = AppError::from(LinkError::invalid_input("Content cannot be empty"));
        assert_eq!(err.message(), "Content cannot be empty");
        assert_eq!(err.to_string(), "Content cannot be empty");
    }
}
