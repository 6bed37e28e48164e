//! MemoryStore: in-memory row store
//!
//! Executes [`Query`] values against a `Vec` of rows guarded by a
//! `parking_lot::RwLock`. It is the reference executor for the row-store
//! boundary: filters are evaluated with [`Filter::matches`], ordering follows
//! `order_by` term by term, and `limit` truncates the sorted result.
//!
//! # Design Notes
//!
//! - **Full scan**: every fetch filters all rows; there are no indexes
//! - **Snapshot reads**: a fetch holds the read lock for the whole query, so
//!   concurrent inserts are either entirely visible or not at all
//! - **Outage simulation**: `set_unavailable(true)` makes every fetch fail,
//!   which lets callers check that backend errors surface unchanged
//! - **Attempt accounting**: `fetch_count` and `last_query` are updated before
//!   the outage check, so they include fetches that failed

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tracing::trace;

use keyset_core::{Query, Record, RowStore, SortOrder};

/// Errors from [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryStoreError {
    /// Store was switched off with `set_unavailable`
    #[error("store unavailable")]
    Unavailable,

    /// A matching row lacks a field named in `ORDER BY`
    #[error("row has no field '{field}' to order by")]
    MissingField {
        /// Field name
        field: String,
    },

    /// Two rows hold different value kinds in an `ORDER BY` field
    #[error("field '{field}' mixes value kinds and cannot be ordered")]
    MixedKinds {
        /// Field name
        field: String,
    },
}

/// Thread-safe in-memory table
#[derive(Debug)]
pub struct MemoryStore<R> {
    rows: RwLock<Vec<R>>,
    unavailable: AtomicBool,
    fetches: AtomicU64,
    last_query: Mutex<Option<Query>>,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        MemoryStore::new()
    }
}

impl<R> MemoryStore<R> {
    /// Create an empty store
    pub fn new() -> Self {
        MemoryStore {
            rows: RwLock::new(Vec::new()),
            unavailable: AtomicBool::new(false),
            fetches: AtomicU64::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Create a store holding `rows`
    pub fn with_rows(rows: impl IntoIterator<Item = R>) -> Self {
        let store = MemoryStore::new();
        store.extend(rows);
        store
    }

    /// Add one row
    pub fn insert(&self, row: R) {
        self.rows.write().push(row);
    }

    /// Add many rows under a single write lock
    pub fn extend(&self, rows: impl IntoIterator<Item = R>) {
        self.rows.write().extend(rows);
    }

    /// Remove every row for which `pred` is true; returns how many were removed
    pub fn remove_where(&self, mut pred: impl FnMut(&R) -> bool) -> usize {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|row| !pred(row));
        before - rows.len()
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// True if no rows are stored
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Make every subsequent fetch fail (or succeed again)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    /// Number of fetches attempted so far, failed ones included
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(AtomicOrdering::Relaxed)
    }

    /// Most recently attempted query, even if the fetch failed
    pub fn last_query(&self) -> Option<Query> {
        self.last_query.lock().clone()
    }
}

impl<R: Record + Clone> MemoryStore<R> {
    fn execute(&self, query: &Query) -> Result<Vec<R>, MemoryStoreError> {
        let rows = self.rows.read();
        let mut matched: Vec<R> = rows
            .iter()
            .filter(|row| query.filter.matches(*row))
            .cloned()
            .collect();
        drop(rows);

        if !query.order_by.is_empty() {
            // Pull sort values once; comparisons below cannot fail.
            let mut keyed = Vec::with_capacity(matched.len());
            for row in matched {
                let mut values = Vec::with_capacity(query.order_by.len());
                for term in &query.order_by {
                    let value = row.field(&term.field).ok_or_else(|| MemoryStoreError::MissingField {
                        field: term.field.clone(),
                    })?;
                    values.push(value);
                }
                keyed.push((values, row));
            }

            for (i, term) in query.order_by.iter().enumerate() {
                if let Some((first, _)) = keyed.first() {
                    let probe = &first[i];
                    if keyed.iter().any(|(values, _)| values[i].compare(probe).is_none()) {
                        return Err(MemoryStoreError::MixedKinds {
                            field: term.field.clone(),
                        });
                    }
                }
            }

            keyed.sort_by(|(a, _), (b, _)| {
                for (i, term) in query.order_by.iter().enumerate() {
                    let ord = a[i].compare(&b[i]).unwrap_or(Ordering::Equal);
                    let ord = match term.order {
                        SortOrder::Asc => ord,
                        SortOrder::Desc => ord.reverse(),
                    };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            });
            matched = keyed.into_iter().map(|(_, row)| row).collect();
        }

        matched.truncate(query.limit);
        Ok(matched)
    }
}

impl<R: Record + Clone + Send + Sync> RowStore<R> for MemoryStore<R> {
    type Error = MemoryStoreError;

    fn fetch(&self, query: &Query) -> Result<Vec<R>, Self::Error> {
        self.fetches.fetch_add(1, AtomicOrdering::Relaxed);
        *self.last_query.lock() = Some(query.clone());

        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(MemoryStoreError::Unavailable);
        }

        trace!(target: "keyset::store", %query, "Executing query");
        self.execute(query)
    }
}
