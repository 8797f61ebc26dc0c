//! Business logic services for the application layer.

pub mod access_service;
pub mod link_index;
pub mod link_service;

pub use access_service::AccessService;
pub use link_index::LinkIndex;
pub use link_service::LinkService;
