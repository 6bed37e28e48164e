//! Page request and response types
//!
//! Wire names follow the listing API (`nextCursor`, `prevCursor`,
//! `hasMore`).

use serde::{Deserialize, Serialize};

use crate::contract::Cursor;

/// Scan direction relative to a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Rows strictly older than the cursor (the normal "next page")
    #[default]
    Older,
    /// Rows strictly newer than the cursor (walking back toward page 1)
    Newer,
}

/// Caller-supplied page parameters
///
/// `limit` is signed so that nonsensical values coming off the wire can be
/// rejected explicitly instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Token from a previous page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Requested page size; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Scan direction
    #[serde(default)]
    pub direction: Direction,
}

impl PageRequest {
    /// First page with the default limit
    pub fn first() -> Self {
        PageRequest::default()
    }

    /// Set the cursor
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the scan direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// One window over a listing
///
/// Built fresh per request and never cached. Items are always newest first.
///
/// For [`Direction::Older`]:
/// - `has_more`: rows exist after the last item
/// - `next_cursor`: resumes after the last item (set iff `has_more`)
/// - `prev_cursor`: first item's key, set when the request carried a cursor
///   and the page is non-empty; pass it with [`Direction::Newer`] to go back
///
/// For [`Direction::Newer`] the roles are mirrored: `has_more` reports rows
/// newer than the first item and `prev_cursor` is set iff `has_more`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<R> {
    /// Rows in `(primary desc, tiebreak desc)` order
    pub items: Vec<R>,
    /// Cursor for the following (older) page
    pub next_cursor: Option<Cursor>,
    /// Cursor for the preceding (newer) page
    pub prev_cursor: Option<Cursor>,
    /// Whether rows exist beyond this page in the scan direction
    pub has_more: bool,
}

impl<R> Page<R> {
    /// Page with no rows and no cursors
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            next_cursor: None,
            prev_cursor: None,
            has_more: false,
        }
    }

    /// Number of rows on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the page has no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the rows, keeping cursors and flags
    pub fn map<T>(self, f: impl FnMut(R) -> T) -> Page<T> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            prev_cursor: self.prev_cursor,
            has_more: self.has_more,
        }
    }
}

impl<R> Default for Page<R> {
    fn default() -> Self {
        Page::empty()
    }
}
