//! Access gate for the statistics pages.
//!
//! A single shared password unlocks the stats views. The password is checked
//! against a configured SHA-256 hex digest. A successful check yields a
//! session token `<expiry>.<mac>` where `expiry` is a unix timestamp and `mac`
//! is the hex HMAC-SHA256 of the expiry under the server session secret.

use std::sync::Arc;

use chrono::Duration;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::clock::Clock;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "stats_session";

/// Lifetime of a session, in seconds.
pub const SESSION_TTL_SECONDS: i64 = 3600;

/// SHA-256 of `password`. Only accepted outside production.
pub const DEV_PASSWORD_HASH: &str =
    "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

/// Returns the lowercase hex SHA-256 digest of `password`.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Generates a random 32-byte session secret.
pub fn random_secret() -> Vec<u8> {
    rand::rng().random::<[u8; 32]>().to_vec()
}

/// Extracts a cookie value from a raw `Cookie` header.
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if key == name => Some(value),
            _ => None,
        }
    })
}

/// Password check and signed session handling.
pub struct AccessService {
    password_hash: String,
    session_secret: Vec<u8>,
    clock: Arc<dyn Clock>,
}

impl AccessService {
    /// Creates the gate.
    ///
    /// # Arguments
    ///
    /// - `password_hash` - hex SHA-256 of the stats password, case-insensitive
    /// - `session_secret` - HMAC key for session tokens
    /// - `clock` - time source for session expiry
    pub fn new(
        password_hash: impl Into<String>,
        session_secret: impl Into<Vec<u8>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            password_hash: password_hash.into().trim().to_ascii_lowercase(),
            session_secret: session_secret.into(),
            clock,
        }
    }

    /// Checks a submitted password against the configured hash.
    pub fn verify_password(&self, password: &str) -> bool {
        let candidate = hash_password(password);
        // Compare MACs of both digests so the comparison runs in constant time.
        self.mac(candidate.as_bytes())
            .verify_slice(&self.mac(self.password_hash.as_bytes()).finalize().into_bytes())
            .is_ok()
    }

    /// Issues a session token valid for [`SESSION_TTL_SECONDS`].
    pub fn issue_session(&self) -> String {
        let expiry = (self.clock.now() + Duration::seconds(SESSION_TTL_SECONDS)).timestamp();
        let signature = hex::encode(self.mac(expiry.to_string().as_bytes()).finalize().into_bytes());
        format!("{}.{}", expiry, signature)
    }

    /// Returns `true` if `token` carries a valid signature and has not expired.
    pub fn verify_session(&self, token: &str) -> bool {
        let Some((expiry, signature)) = token.split_once('.') else {
            return false;
        };
        let Ok(signature) = hex::decode(signature) else {
            return false;
        };
        if self.mac(expiry.as_bytes()).verify_slice(&signature).is_err() {
            debug!("Rejected session with bad signature");
            return false;
        }

        match expiry.parse::<i64>() {
            Ok(expiry) => self.clock.now().timestamp() < expiry,
            Err(_) => false,
        }
    }

    /// `Set-Cookie` value carrying a fresh session token.
    pub fn session_cookie(&self, token: &str) -> String {
        format!(
            "{}={}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={}",
            SESSION_COOKIE, token, SESSION_TTL_SECONDS
        )
    }

    /// `Set-Cookie` value that clears the session.
    pub fn clear_cookie(&self) -> String {
        format!(
            "{}=; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=0",
            SESSION_COOKIE
        )
    }

    fn mac(&self, data: &[u8]) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(&self.session_secret)
            .expect("HMAC accepts any key length");
        mac.update(data);
        mac
    }
}
