//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::store::KvStore`] trait and expose a
//! small API to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link lifecycle
//! - [`services::link_index::LinkIndex`] - Best-effort index of known codes
//! - [`services::access_service::AccessService`] - Stats password and sessions

pub mod services;
