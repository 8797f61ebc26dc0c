//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod create;
pub mod delete;
pub mod health;
pub mod links;
pub mod redirect;

pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use links::links_handler;
pub use redirect::redirect_handler;
