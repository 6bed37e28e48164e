//! Boundary predicate
//!
//! Turns a decoded sort key into the filter that selects rows strictly beyond
//! it in scan order. The predicate is written as an `OR` of two clauses so
//! any store that supports plain comparisons can run it on a
//! `(primary, id)` index:
//!
//! ```text
//! Older:  primary < k.primary  OR  (primary = k.primary AND id < k.id)
//! Newer:  primary > k.primary  OR  (primary = k.primary AND id > k.id)
//! ```
//!
//! The tenant scope is not part of the predicate; callers conjoin it.

use keyset_core::{Direction, FieldValue, Filter, OrderBy, SortKey};

/// Builds boundary filters and sort terms for one listing's field names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPredicate<'a> {
    primary_field: &'a str,
    id_field: &'a str,
}

impl<'a> BoundaryPredicate<'a> {
    /// Predicate over `primary_field` with `id_field` as tiebreak
    pub const fn new(primary_field: &'a str, id_field: &'a str) -> Self {
        BoundaryPredicate {
            primary_field,
            id_field,
        }
    }

    /// Filter selecting rows strictly beyond `key` in `direction`
    ///
    /// Returns `None` when there is no key: the scan starts at the edge of
    /// the stream (the newest row for `Older`).
    pub fn build(&self, key: Option<&SortKey>, direction: Direction) -> Option<Filter> {
        let key = key?;
        let primary = FieldValue::from(*key.primary());
        let id = FieldValue::from(key.tiebreak_id());

        let beyond = |field: &str, value: FieldValue| match direction {
            Direction::Older => Filter::Lt(field.to_string(), value),
            Direction::Newer => Filter::Gt(field.to_string(), value),
        };

        Some(Filter::Or(vec![
            beyond(self.primary_field, primary.clone()),
            Filter::And(vec![
                Filter::Eq(self.primary_field.to_string(), primary),
                beyond(self.id_field, id),
            ]),
        ]))
    }

    /// Sort terms that walk the stream in `direction`
    pub fn order_by(&self, direction: Direction) -> Vec<OrderBy> {
        match direction {
            Direction::Older => vec![OrderBy::desc(self.primary_field), OrderBy::desc(self.id_field)],
            Direction::Newer => vec![OrderBy::asc(self.primary_field), OrderBy::asc(self.id_field)],
        }
    }
}
