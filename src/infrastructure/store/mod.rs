//! Key-value store backends.
//!
//! Provides two [`crate::domain::store::KvStore`] implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process store for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
