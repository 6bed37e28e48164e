//! Storage layer for keyset
//!
//! This crate implements the in-memory row store:
//! - MemoryStore: `RwLock<Vec<R>>` table that executes `Query` values
//! - MemoryStoreError: outage and schema errors
//!
//! Production listings talk to a hosted relational backend through their own
//! `RowStore` implementation; this store is the reference executor for the
//! same boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::{MemoryStore, MemoryStoreError};
