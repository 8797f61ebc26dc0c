//! Expiration classes accepted on link creation.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifetime of a link, chosen from a fixed set at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiration {
    #[default]
    Never,
    TenMinutes,
    ThirtyMinutes,
    OneHour,
    OneDay,
    SevenDays,
    ThirtyDays,
}

/// Returned by [`Expiration::from_str`] for unknown class names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown expiration class '{0}'")]
pub struct UnknownExpiration(pub String);

impl Expiration {
    pub const ALL: [Expiration; 7] = [
        Expiration::Never,
        Expiration::TenMinutes,
        Expiration::ThirtyMinutes,
        Expiration::OneHour,
        Expiration::OneDay,
        Expiration::SevenDays,
        Expiration::ThirtyDays,
    ];

    /// Parses a class name, treating anything unrecognized as [`Expiration::Never`].
    pub fn from_class(class: Option<&str>) -> Self {
        class
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Expiration::Never => "never",
            Expiration::TenMinutes => "10m",
            Expiration::ThirtyMinutes => "30m",
            Expiration::OneHour => "1h",
            Expiration::OneDay => "24h",
            Expiration::SevenDays => "7d",
            Expiration::ThirtyDays => "30d",
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            Expiration::Never => None,
            Expiration::TenMinutes => Some(Duration::minutes(10)),
            Expiration::ThirtyMinutes => Some(Duration::minutes(30)),
            Expiration::OneHour => Some(Duration::hours(1)),
            Expiration::OneDay => Some(Duration::days(1)),
            Expiration::SevenDays => Some(Duration::days(7)),
            Expiration::ThirtyDays => Some(Duration::days(30)),
        }
    }

    /// Absolute expiry instant for a link created at `now`.
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.duration().map(|d| now + d)
    }
}

impl FromStr for Expiration {
    type Err = UnknownExpiration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expiration::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownExpiration(s.to_string()))
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
