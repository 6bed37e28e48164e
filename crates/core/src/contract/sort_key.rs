//! Sort key: the `(primary, tiebreak)` pair that totally orders a listing
//!
//! Listings are served newest first. The primary field is a calendar date or
//! a UTC timestamp and is not unique; the tiebreak id is unique per row and
//! resolves ties so that rows sharing a primary value are never skipped or
//! repeated across page boundaries.
//!
//! ## Canonical form
//!
//! | Primary | Canonical string |
//! |---------|------------------|
//! | `Date` | `YYYY-MM-DD` |
//! | `Timestamp` | RFC 3339, UTC, nanosecond precision (`2024-01-01T08:30:00.000000000Z`) |
//!
//! Both forms sort lexically in the same order as the values they encode
//! and parse back to the identical value for years 0000 to 9999.
//! [`SortKey::new`] rejects primaries outside that range.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Delimiter between the primary and tiebreak parts of an encoded key.
///
/// Never valid inside a tiebreak id.
pub const KEY_DELIMITER: char = '|';

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest year a primary may fall in
pub const MIN_PRIMARY_YEAR: i32 = 0;

/// Latest year a primary may fall in
pub const MAX_PRIMARY_YEAR: i32 = 9999;

/// Which kind of value a listing orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryKind {
    /// Calendar date
    Date,
    /// UTC timestamp
    Timestamp,
}

/// Primary ordering value of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Primary {
    /// Calendar date (no time component)
    Date(NaiveDate),
    /// Instant in UTC
    Timestamp(DateTime<Utc>),
}

impl Primary {
    /// Kind of this value
    pub fn kind(&self) -> PrimaryKind {
        match self {
            Primary::Date(_) => PrimaryKind::Date,
            Primary::Timestamp(_) => PrimaryKind::Timestamp,
        }
    }

    /// Calendar year of this value
    pub fn year(&self) -> i32 {
        match self {
            Primary::Date(date) => date.year(),
            Primary::Timestamp(ts) => ts.year(),
        }
    }

    /// Canonical, lexically sortable string form
    pub fn canonical(&self) -> String {
        match self {
            Primary::Date(date) => date.format(DATE_FORMAT).to_string(),
            Primary::Timestamp(ts) => ts.to_rfc3339_opts(SecondsFormat::Nanos, true),
        }
    }

    /// Parse a canonical string back into a primary value
    ///
    /// A bare `YYYY-MM-DD` is a date; anything else must be RFC 3339.
    /// Returns `None` when neither form parses.
    pub fn parse_canonical(s: &str) -> Option<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
            return Some(Primary::Date(date));
        }
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|ts| Primary::Timestamp(ts.with_timezone(&Utc)))
    }
}

impl From<NaiveDate> for Primary {
    fn from(date: NaiveDate) -> Self {
        Primary::Date(date)
    }
}

impl From<DateTime<Utc>> for Primary {
    fn from(ts: DateTime<Utc>) -> Self {
        Primary::Timestamp(ts)
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Reasons a `(primary, tiebreak)` pair is not a valid sort key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortKeyError {
    /// Tiebreak id is the empty string
    #[error("tiebreak id is empty")]
    EmptyTiebreak,

    /// Tiebreak id contains the key delimiter
    #[error("tiebreak id {id:?} contains the reserved delimiter '|'")]
    DelimiterInTiebreak {
        /// Offending id
        id: String,
    },

    /// Primary falls outside years 0000 to 9999, where the canonical form
    /// no longer parses back
    #[error("primary {primary} is outside years 0000-9999")]
    PrimaryOutOfRange {
        /// Canonical form of the offending value
        primary: String,
    },
}

/// Position of a row in the `(primary desc, tiebreak desc)` stream
///
/// The derived `Ord` is ascending `(primary, tiebreak_id)`; listings walk it
/// in reverse. Construction validates the tiebreak id, so every `SortKey`
/// value can be encoded into a cursor and decoded back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    primary: Primary,
    tiebreak_id: String,
}

impl SortKey {
    /// Create a sort key
    ///
    /// # Errors
    ///
    /// Returns an error if the primary is outside years 0000 to 9999, or
    /// if the tiebreak id is empty or contains `|`.
    pub fn new(primary: impl Into<Primary>, tiebreak_id: impl Into<String>) -> Result<Self, SortKeyError> {
        let primary = primary.into();
        if !(MIN_PRIMARY_YEAR..=MAX_PRIMARY_YEAR).contains(&primary.year()) {
            return Err(SortKeyError::PrimaryOutOfRange {
                primary: primary.canonical(),
            });
        }
        let tiebreak_id = tiebreak_id.into();
        if tiebreak_id.is_empty() {
            return Err(SortKeyError::EmptyTiebreak);
        }
        if tiebreak_id.contains(KEY_DELIMITER) {
            return Err(SortKeyError::DelimiterInTiebreak { id: tiebreak_id });
        }
        Ok(SortKey {
            primary,
            tiebreak_id,
        })
    }

    /// Primary ordering value
    #[inline]
    pub fn primary(&self) -> &Primary {
        &self.primary
    }

    /// Unique tiebreak id
    #[inline]
    pub fn tiebreak_id(&self) -> &str {
        &self.tiebreak_id
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.primary, KEY_DELIMITER, self.tiebreak_id)
    }
}
