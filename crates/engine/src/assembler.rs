//! Page assembly
//!
//! One page request is one store query:
//!
//! 1. Decode the cursor. An unusable token, or one whose primary is not the
//!    listing's kind, is logged and dropped, and the scan starts at the edge
//!    of the stream.
//! 2. Conjoin the scope with the boundary predicate and fetch `limit + 1`
//!    rows in scan order.
//! 3. The extra row only answers "is there more?". It is never returned.
//! 4. Derive edge cursors from the first and last returned rows.
//!
//! Nothing is cached between calls; all resumption state is in the cursor.

use std::marker::PhantomData;

use keyset_core::{
    Cursor, CursorCodec, Direction, Filter, LimitError, Page, PageError, PageResult, Query,
    RowStore, SortKey,
};
use tracing::{debug, trace};

use crate::listing::Listing;

/// Assembles pages of listing `L` from store `S`
pub struct PageAssembler<'a, L, S> {
    store: &'a S,
    codec: &'a CursorCodec,
    _listing: PhantomData<fn() -> L>,
}

impl<'a, L, S> PageAssembler<'a, L, S>
where
    L: Listing,
    S: RowStore<L::Row>,
{
    /// Assembler reading from `store` and encoding cursors with `codec`
    pub fn new(store: &'a S, codec: &'a CursorCodec) -> Self {
        PageAssembler {
            store,
            codec,
            _listing: PhantomData,
        }
    }

    /// Build one page
    ///
    /// `scope` is applied as-is; `limit` is the resolved page size.
    ///
    /// # Errors
    ///
    /// - `InvalidLimit` if `limit` is zero
    /// - `Store` if the query fails
    /// - `InvalidSortKey` if an edge row cannot produce a cursor
    pub fn assemble(
        &self,
        scope: &Filter,
        cursor: Option<&str>,
        limit: usize,
        direction: Direction,
    ) -> PageResult<Page<L::Row>, S::Error> {
        if limit == 0 {
            return Err(LimitError::NonPositive { requested: 0 }.into());
        }

        let key = cursor.and_then(|token| self.decode_or_restart(token));

        let boundary = L::boundary();
        let filter = match boundary.build(key.as_ref(), direction) {
            Some(predicate) => scope.clone().and(predicate),
            None => scope.clone(),
        };
        let query = Query {
            table: L::TABLE.to_string(),
            filter,
            order_by: boundary.order_by(direction),
            limit: limit.saturating_add(1),
        };
        trace!(target: "keyset::page", %query, "Fetching page");

        let mut rows = self.store.fetch(&query).map_err(PageError::Store)?;
        let has_more = rows.len() > limit;
        rows.truncate(limit);
        if direction == Direction::Newer {
            rows.reverse();
        }

        let resumed = key.is_some();
        let (next_cursor, prev_cursor) = match direction {
            Direction::Older => (
                self.edge_cursor(rows.last().filter(|_| has_more))?,
                self.edge_cursor(rows.first().filter(|_| resumed))?,
            ),
            Direction::Newer => (
                self.edge_cursor(rows.last().filter(|_| resumed))?,
                self.edge_cursor(rows.first().filter(|_| has_more))?,
            ),
        };

        debug!(
            target: "keyset::page",
            table = L::TABLE,
            ?direction,
            resumed,
            items = rows.len(),
            has_more,
            "Assembled page"
        );

        Ok(Page {
            items: rows,
            next_cursor,
            prev_cursor,
            has_more,
        })
    }

    fn decode_or_restart(&self, token: &str) -> Option<SortKey> {
        match self.codec.try_decode(token) {
            Ok(key) if key.primary().kind() == L::PRIMARY_KIND => Some(key),
            Ok(key) => {
                debug!(
                    target: "keyset::cursor",
                    table = L::TABLE,
                    cursor_kind = ?key.primary().kind(),
                    expected = ?L::PRIMARY_KIND,
                    "Ignoring cursor from another listing, starting from the first page"
                );
                None
            }
            Err(reason) => {
                debug!(
                    target: "keyset::cursor",
                    table = L::TABLE,
                    %reason,
                    "Ignoring unusable cursor, starting from the first page"
                );
                None
            }
        }
    }

    fn edge_cursor(&self, row: Option<&L::Row>) -> PageResult<Option<Cursor>, S::Error> {
        let Some(row) = row else {
            return Ok(None);
        };
        let key = L::sort_key(row).map_err(|reason| PageError::InvalidSortKey {
            table: L::TABLE.to_string(),
            reason,
        })?;
        Ok(Some(self.codec.encode(&key)))
    }
}
