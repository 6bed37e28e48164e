//! Core types for keyset pagination
//!
//! This crate defines everything a listing needs that is independent of
//! where rows live:
//! - SortKey / Primary: the `(primary, tiebreak)` ordering pair
//! - Cursor / CursorCodec: opaque resumption tokens
//! - Filter / FieldValue / Record: predicates a row store can execute
//! - Query / RowStore: the row-store boundary
//! - Page / PageRequest / Direction: request and response shapes
//! - PageLimits: page size policy
//! - PageError: failure taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod contract;
pub mod error;
pub mod filter;
pub mod limits;
pub mod page;
pub mod traits;

pub use codec::{CursorCodec, CursorDecodeError, CursorEncoding, DEFAULT_MAX_CURSOR_LEN};
pub use contract::{
    Cursor, Primary, PrimaryKind, SortKey, SortKeyError, KEY_DELIMITER, MAX_PRIMARY_YEAR,
    MIN_PRIMARY_YEAR,
};
pub use error::{PageError, PageResult};
pub use filter::{FieldValue, Filter, Record};
pub use limits::{LimitError, PageLimits, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use page::{Direction, Page, PageRequest};
pub use traits::{OrderBy, Query, RowStore, SortOrder};
