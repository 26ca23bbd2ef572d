//! Product aggregate recomputation service.

use mercato_catalog::ProductAggregate;
use mercato_core::ProductId;

use crate::catalog_store::{CatalogStore, StoreError};

/// Recomputes a product's cached aggregates from its current variant set.
///
/// Stateless: one read, one write per invocation, both against the store.
/// Invoked by the surrounding application after every variant create, update,
/// or delete (including deletion of the last variant).
#[derive(Debug)]
pub struct Aggregator<S>
where
    S: CatalogStore,
{
    store: S,
}

impl<S> Aggregator<S>
where
    S: CatalogStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Recompute and persist the product's summary from the variant snapshot
    /// read at call time.
    ///
    /// - Empty variant set: both aggregate fields are written as zero (the
    ///   zero-variant product is tolerated, not rejected).
    /// - Store failures propagate unchanged; nothing is written on a read
    ///   failure, and the write is atomic over both fields.
    /// - No transaction spans the read and the write. Two concurrent
    ///   recomputations of the same product can interleave so that the write
    ///   from the older snapshot lands last; callers that need strictness
    ///   must serialize per product or wrap the pair in a store-provided
    ///   transaction.
    pub fn recompute(&self, product_id: ProductId) -> Result<(), StoreError> {
        let variants = self.store.find_variants(product_id)?;
        let summary = ProductAggregate::of(&variants).summary();

        self.store.update_product_aggregates(product_id, summary)?;

        tracing::debug!(
            product_id = %product_id,
            variants = variants.len(),
            min_price = summary.price,
            total_stock = summary.stock,
            "recomputed product aggregates"
        );
        Ok(())
    }
}
