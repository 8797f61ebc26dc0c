//! Short code generation and validation utilities.
//!
//! Random codes are drawn uniformly from the 62 ASCII alphanumerics.
//! Custom codes supplied by users are validated so they can never shadow a
//! reserved store key or an application route.

use crate::domain::error::LinkError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Symbols random codes are drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest custom code accepted.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Codes that collide with application routes.
pub const RESERVED_CODES: &[&str] = &["api", "stats", "validate", "logout", "health", "u", "static"];

static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("custom code regex is valid"));

/// Returns true if `code` matches a reserved route segment, ignoring case.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}

/// Generates a random short code of `length` symbols using the thread-local RNG.
///
/// Uniqueness is not guaranteed; callers must check the store.
pub fn generate_code(length: usize) -> String {
    generate_code_with(&mut rand::rng(), length)
}

/// Generates a random short code from an explicit random source.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
/// - Cannot start with `_` (that prefix is kept for internal store keys)
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`LinkError::InvalidInput`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), LinkError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(LinkError::invalid_input(format!(
            "Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"
        )));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(LinkError::invalid_input(
            "Custom code can only contain letters, digits, '_' and '-'",
        ));
    }

    if code.starts_with('_') {
        return Err(LinkError::invalid_input(
            "Custom code cannot start with '_'",
        ));
    }

    if is_reserved_code(code) {
        return Err(LinkError::invalid_input("This code is reserved"));
    }

    Ok(())
}
