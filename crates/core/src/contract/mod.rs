//! Contract types shared by every listing
//!
//! - `sort_key`: the `(primary, tiebreak)` ordering pair
//! - `cursor`: the opaque token that encodes one sort key

pub mod cursor;
pub mod sort_key;

pub use cursor::Cursor;
pub use sort_key::{
    Primary, PrimaryKind, SortKey, SortKeyError, KEY_DELIMITER, MAX_PRIMARY_YEAR, MIN_PRIMARY_YEAR,
};
