//! Listing: what the paginator needs to know about one entity type
//!
//! Every paginated screen lists one table newest first. A `Listing` names the
//! table, the primary ordering field, the tiebreak field, and how to read a
//! row's sort key. The pagination logic itself is shared.

use keyset_core::{FieldValue, Filter, PrimaryKind, SortKey, SortKeyError};
use uuid::Uuid;

use crate::boundary::BoundaryPredicate;

/// Field that holds the owning company on every listed table
pub const COMPANY_FIELD: &str = "company_id";

/// A table listed newest first with keyset pagination
///
/// `sort_key` must agree with the fields the store orders by:
/// `PRIMARY_FIELD` yields the key's primary and `ID_FIELD` its tiebreak, with
/// the same text the store compares.
pub trait Listing: Send + Sync + 'static {
    /// Row type returned by the store
    type Row: Clone + Send + Sync;

    /// Table name
    const TABLE: &'static str;

    /// Primary ordering field (date or timestamp)
    const PRIMARY_FIELD: &'static str;

    /// Kind of value in `PRIMARY_FIELD`; cursors of another kind are ignored
    const PRIMARY_KIND: PrimaryKind;

    /// Unique tiebreak field
    const ID_FIELD: &'static str = "id";

    /// Sort key of a row
    ///
    /// # Errors
    ///
    /// Returns an error if the row's id cannot serve as a tiebreak.
    fn sort_key(row: &Self::Row) -> Result<SortKey, SortKeyError>;

    /// Boundary predicate over this listing's fields
    fn boundary() -> BoundaryPredicate<'static> {
        BoundaryPredicate::new(Self::PRIMARY_FIELD, Self::ID_FIELD)
    }
}

/// Scope filter restricting a listing to one company's rows
pub fn company_scope(company_id: &Uuid) -> Filter {
    Filter::eq(COMPANY_FIELD, FieldValue::Text(company_id.to_string()))
}
