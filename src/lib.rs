//! # KV Shortener
//!
//! A URL and text shortener on top of a key-value store, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link records, the store contract, the clock
//! - **Application Layer** ([`application`]) - Link lifecycle, index maintenance, access gate
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML pages
//!
//! ## Features
//!
//! - Short codes for URLs (302 redirect) and text snippets (content page)
//! - Custom codes and expiration classes from 10 minutes to 30 days
//! - Click counting
//! - Password-gated statistics page
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccessService, LinkService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Expiration, LiveLink, NewLink, ResolvedView};
    pub use crate::domain::store::KvStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
