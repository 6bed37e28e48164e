//! Keyset - cursor pagination for reverse-chronological listings
//!
//! Lists a company's certificates, events, QR documents, extinguisher
//! controls and self-protection systems newest first, one bounded page at a
//! time. Each page carries an opaque cursor that resumes exactly after the
//! last row shown, independent of rows inserted or deleted in between.
//!
//! # Quick Start
//!
//! ```
//! use keyset::{MemoryStore, PageRequest, Paginator};
//! use keyset::listings::{Event, Events};
//! use uuid::Uuid;
//!
//! let company = Uuid::new_v4();
//! let store: MemoryStore<Event> = MemoryStore::new();
//! let events = Paginator::<Events, _>::new(store);
//!
//! let page = events.for_company(&company, &PageRequest::first())?;
//! if let Some(cursor) = page.next_cursor {
//!     let _next = events.for_company(&company, &PageRequest::first().after(cursor))?;
//! }
//! # Ok::<(), keyset::PageError<keyset::MemoryStoreError>>(())
//! ```
//!
//! # Architecture
//!
//! - `keyset-core`: sort keys, the cursor codec, filters, and the row-store trait
//! - `keyset-storage`: an in-memory row store
//! - `keyset-engine`: boundary predicates, page assembly, listings, and config
//!
//! Applications normally depend on this crate only.

pub use keyset_core::*;
pub use keyset_engine::*;
pub use keyset_storage::{MemoryStore, MemoryStoreError};
