//! Web layer for browser-facing pages.
//!
//! Uses Askama templates from `templates/` for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
