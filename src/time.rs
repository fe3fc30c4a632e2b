//! Time primitives for temporal claims
//!
//! A `NumericDate` is the number of seconds elapsed since 1970-01-01
//! 00:00:00 UTC, as used by the `exp`, `nbf`, and `iat` claims
//! ([RFC 7519 section 2](https://datatracker.ietf.org/doc/html/rfc7519#section-2)).
//!
//! Wall-clock reads go through the [`Clock`] trait so that pipelines can be
//! driven by a deterministic time source in tests.

use crate::error::{Error, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NumericDate(i64);

impl NumericDate {
    /// Create a numeric date from epoch seconds
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Get the epoch seconds
    pub fn as_secs(self) -> i64 {
        self.0
    }

    /// Shift this date forward by a duration
    pub fn add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.as_secs()))
    }
}

impl std::fmt::Display for NumericDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive count of seconds
///
/// Used to derive `exp` and `nbf` from the current time. Zero or negative
/// values are a construction-time error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(i64);

impl Duration {
    /// Create a duration from a strictly positive number of seconds
    pub fn from_secs(secs: i64) -> Result<Self> {
        if secs <= 0 {
            return Err(Error::InvalidDuration(secs));
        }
        Ok(Self(secs))
    }

    /// Get the number of seconds
    pub fn as_secs(self) -> i64 {
        self.0
    }
}

/// A source of the current time
///
/// The pipelines read the wall clock through this trait; swap in
/// [`FixedClock`] for deterministic tests.
pub trait Clock {
    /// The current time as a numeric date
    fn now(&self) -> NumericDate;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NumericDate {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System time is before Unix epoch")
            .as_secs() as i64;
        NumericDate::from_secs(secs)
    }
}

/// A clock pinned to a fixed instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> NumericDate {
        NumericDate::from_secs(self.0)
    }
}
