//! Domain layer containing business entities and storage contracts.
//!
//! This module holds everything the link lifecycle depends on, independent of
//! HTTP or any concrete storage backend.
//!
//! # Architecture
//!
//! - [`entities`] - Link records, resolved views, expiration classes
//! - [`store`] - The key-value store contract consumed by the services
//! - [`clock`] - Wall-clock abstraction used for expiry decisions
//! - [`error`] - Domain error taxonomy
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The [`store::KvStore`] trait is implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])
//!
//! # Storage Layout
//!
//! Every link is stored as a JSON document under its short code. A second,
//! reserved key holds a JSON array of all known codes (the index), because
//! the store itself cannot enumerate keys.

pub mod clock;
pub mod entities;
pub mod error;
pub mod store;
