//! HTTP middleware for request processing and protection.
//!
//! Provides the stats session gate, CORS policy, and request tracing.

pub mod cors;
pub mod session;
pub mod tracing;
