//! DTOs for the link deletion endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub success: bool,
    pub message: String,
}
