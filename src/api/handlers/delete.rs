//! Handler for link deletion endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::delete::DeleteLinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a link and removes it from the index.
///
/// # Endpoint
///
/// `DELETE /api/delete/{code}`
///
/// # Errors
///
/// - 404 Not Found: no link under `code`
/// - 500 Internal Server Error: store failure
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete(&code).await?;

    Ok(Json(DeleteLinkResponse {
        success: true,
        message: format!("Link '{}' deleted", code),
    }))
}
