//! Catalog persistence boundary.
//!
//! This module defines an infrastructure-facing abstraction for reading a
//! product's variants and writing back its cached aggregates, without making
//! any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryCatalogStore;
pub use r#trait::{CatalogStore, StoreError};
