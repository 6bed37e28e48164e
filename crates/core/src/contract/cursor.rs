//! Opaque continuation token handed to callers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque resumption point in a sorted listing
///
/// Produced by [`CursorCodec::encode`](crate::codec::CursorCodec::encode) and
/// round-tripped by callers on the next request. Callers must treat the
/// contents as opaque; a cursor is only meaningful for the listing and sort
/// order that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap an already-encoded token
    pub fn from_token(token: impl Into<String>) -> Self {
        Cursor(token.into())
    }

    /// Token as sent on the wire
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw token
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.0
    }
}
