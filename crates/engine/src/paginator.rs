//! Paginator: public entry point for one listing
//!
//! Resolves the page size, then delegates to [`PageAssembler`]. Holds no
//! mutable state, so one paginator can serve any number of concurrent
//! requests; for an unchanged collection, identical requests give identical
//! pages.

use std::marker::PhantomData;

use keyset_core::{CursorCodec, Filter, Page, PageLimits, PageRequest, PageResult, RowStore};
use uuid::Uuid;

use crate::assembler::PageAssembler;
use crate::config::PaginationConfig;
use crate::listing::{company_scope, Listing};

/// Keyset paginator for listing `L` backed by store `S`
///
/// `S` may be a store, a reference to one, or an `Arc`.
///
/// # Example
///
/// ```
/// use keyset_engine::listings::{Certificate, Certificates};
/// use keyset_engine::Paginator;
/// use keyset_core::PageRequest;
/// use keyset_storage::MemoryStore;
/// use uuid::Uuid;
///
/// let store: MemoryStore<Certificate> = MemoryStore::new();
/// let paginator = Paginator::<Certificates, _>::new(&store);
/// let page = paginator
///     .for_company(&Uuid::new_v4(), &PageRequest::first())
///     .unwrap();
/// assert!(page.items.is_empty());
/// assert!(!page.has_more);
/// ```
pub struct Paginator<L, S> {
    store: S,
    codec: CursorCodec,
    limits: PageLimits,
    _listing: PhantomData<fn() -> L>,
}

impl<L, S> Paginator<L, S>
where
    L: Listing,
    S: RowStore<L::Row>,
{
    /// Paginator with default limits and codec
    pub fn new(store: S) -> Self {
        Self::with_config(store, &PaginationConfig::default())
    }

    /// Paginator using `config`
    pub fn with_config(store: S, config: &PaginationConfig) -> Self {
        Paginator {
            store,
            codec: config.codec(),
            limits: config.limits(),
            _listing: PhantomData,
        }
    }

    /// Fetch one page of rows matching `scope`
    ///
    /// # Errors
    ///
    /// - `InvalidLimit` for a zero or negative `limit`
    /// - `Store` when the row store fails; the store's error is returned as-is
    /// - `InvalidSortKey` when a row's id cannot be used in a cursor
    pub fn paginate(&self, scope: &Filter, request: &PageRequest) -> PageResult<Page<L::Row>, S::Error> {
        let limit = self.limits.resolve(request.limit)?;
        PageAssembler::<L, S>::new(&self.store, &self.codec).assemble(
            scope,
            request.cursor.as_deref(),
            limit,
            request.direction,
        )
    }

    /// Fetch one page of a company's rows
    ///
    /// # Errors
    ///
    /// Same as [`Paginator::paginate`].
    pub fn for_company(&self, company_id: &Uuid, request: &PageRequest) -> PageResult<Page<L::Row>, S::Error> {
        self.paginate(&company_scope(company_id), request)
    }

    /// Codec used for this listing's cursors
    pub fn codec(&self) -> &CursorCodec {
        &self.codec
    }

    /// Page size policy
    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
