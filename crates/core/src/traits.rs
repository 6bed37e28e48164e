//! Row-store abstraction
//!
//! The pagination core never fetches rows itself. It describes what it needs
//! as a [`Query`] and hands it to a [`RowStore`], which may be a hosted SQL
//! backend, an HTTP data API, or the in-memory store used in tests.
//!
//! A store must support:
//! - equality filtering (tenant scope)
//! - the boundary predicate: an `OR` of a strict inequality and an
//!   equality-plus-inequality
//! - a two-key sort in either direction
//! - `LIMIT`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filter::Filter;

/// Sort direction of one `ORDER BY` term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

/// One `ORDER BY` term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Field name
    pub field: String,
    /// Direction
    pub order: SortOrder,
}

impl OrderBy {
    /// Descending on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }

    /// Ascending on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }
}

/// A single bounded, ordered fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Table or collection name
    pub table: String,
    /// Rows must match this filter
    pub filter: Filter,
    /// Sort terms, most significant first
    pub order_by: Vec<OrderBy>,
    /// Maximum rows to return
    pub limit: usize,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT * FROM {} WHERE {}", self.table, self.filter)?;
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            for (i, term) in self.order_by.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                let dir = match term.order {
                    SortOrder::Asc => "ASC",
                    SortOrder::Desc => "DESC",
                };
                write!(f, "{} {}", term.field, dir)?;
            }
        }
        write!(f, " LIMIT {}", self.limit)
    }
}

/// Executes queries against the rows of one entity type
///
/// Thread safety: implementations are shared between concurrent page
/// requests and must be `Send + Sync`.
///
/// Errors are returned to the paginator's caller unchanged; a store must not
/// turn a backend failure into an empty result.
pub trait RowStore<R>: Send + Sync {
    /// Store failure
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return at most `query.limit` rows matching `query.filter`, ordered by
    /// `query.order_by`
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the query cannot be executed.
    fn fetch(&self, query: &Query) -> Result<Vec<R>, Self::Error>;
}

impl<R, S: RowStore<R> + ?Sized> RowStore<R> for &S {
    type Error = S::Error;

    fn fetch(&self, query: &Query) -> Result<Vec<R>, Self::Error> {
        (**self).fetch(query)
    }
}

impl<R, S: RowStore<R> + ?Sized> RowStore<R> for std::sync::Arc<S> {
    type Error = S::Error;

    fn fetch(&self, query: &Query) -> Result<Vec<R>, Self::Error> {
        (**self).fetch(query)
    }
}
