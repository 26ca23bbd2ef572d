//! Infrastructure layer: the persistence boundary the catalog derivations run
//! against, plus the recompute service itself.

pub mod aggregation;
pub mod catalog_store;

pub use aggregation::Aggregator;
pub use catalog_store::{CatalogStore, InMemoryCatalogStore, StoreError};
