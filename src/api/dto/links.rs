//! DTOs for the live link listing.

use serde::Serialize;

use crate::domain::entities::LiveLink;

/// Every live link, in index order.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub success: bool,
    pub total: usize,
    pub links: Vec<LiveLink>,
}
