//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`request_origin`] - Public origin extraction from HTTP headers

pub mod code_generator;
pub mod request_origin;
