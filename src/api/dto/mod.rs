//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names are camelCase on the wire.

pub mod create;
pub mod delete;
pub mod health;
pub mod links;
