//! Error types for paginated listing
//!
//! Only two things can fail a page request: a bad page size, and the row
//! store. A malformed cursor is not an error (it degrades to the first page),
//! and a row that cannot yield a sort key is reported rather than encoded
//! into a cursor that would never decode.

use thiserror::Error;

use crate::contract::SortKeyError;
use crate::limits::LimitError;

/// Result of a page request against a store with error type `E`
pub type PageResult<T, E> = std::result::Result<T, PageError<E>>;

/// Page request failure
#[derive(Debug, Error)]
pub enum PageError<E: std::error::Error + 'static> {
    /// Caller sent an unusable page size
    #[error("invalid page limit: {0}")]
    InvalidLimit(#[from] LimitError),

    /// A fetched row has no valid sort key
    #[error("row in '{table}' has an invalid sort key: {reason}")]
    InvalidSortKey {
        /// Table the row came from
        table: String,
        /// Why the key was rejected
        reason: SortKeyError,
    },

    /// The row store failed; the error is passed through unchanged
    #[error("row store error: {0}")]
    Store(#[source] E),
}

impl<E: std::error::Error + 'static> PageError<E> {
    /// True for errors caused by the request rather than the backend
    pub fn is_usage_error(&self) -> bool {
        matches!(self, PageError::InvalidLimit(_))
    }

    /// Store error, if that is what this is
    pub fn store_error(&self) -> Option<&E> {
        match self {
            PageError::Store(e) => Some(e),
            _ => None,
        }
    }
}
