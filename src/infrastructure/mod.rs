//! Infrastructure layer for external integrations.
//!
//! Implements [`crate::domain::store::KvStore`] for the supported backends.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory key-value stores

pub mod store;
