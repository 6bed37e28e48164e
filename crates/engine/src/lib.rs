//! Keyset pagination engine
//!
//! Builds pages of reverse-chronological listings on top of any
//! [`RowStore`](keyset_core::RowStore):
//!
//! - [`BoundaryPredicate`]: sort key → "strictly beyond" filter
//! - [`PageAssembler`]: one query per page, lookahead `has_more`, edge cursors
//! - [`Paginator`]: limit policy + assembler, the entry point for callers
//! - [`Listing`]: per-table field names and sort key extraction
//! - [`listings`]: the five listed entity types
//! - [`PaginationConfig`]: `keyset.toml` settings
//!
//! Tracing targets: `keyset::page` for assembled pages and queries,
//! `keyset::cursor` for discarded cursor tokens.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod boundary;
pub mod config;
pub mod listing;
pub mod listings;
pub mod paginator;

pub use assembler::PageAssembler;
pub use boundary::BoundaryPredicate;
pub use config::{ConfigError, PaginationConfig, CONFIG_FILE_NAME};
pub use listing::{company_scope, Listing, COMPANY_FIELD};
pub use paginator::Paginator;
