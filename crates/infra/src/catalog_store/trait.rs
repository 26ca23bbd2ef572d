use std::sync::Arc;

use thiserror::Error;

use mercato_catalog::{ProductSummary, VariantRecord};
use mercato_core::ProductId;

/// Catalog store operation error.
///
/// These are **infrastructure errors** (missing rows, storage failures) as
/// opposed to domain errors. The aggregation service surfaces them to its
/// caller unchanged — no translation, no retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error("read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(String),
}

/// Persistence collaborator for product aggregate recomputation.
///
/// Implementations make no ordering promises across products and provide no
/// transaction spanning a `find_variants` / `update_product_aggregates` pair;
/// see [`crate::Aggregator`] for the consequences.
pub trait CatalogStore: Send + Sync {
    /// All variants currently owned by the product, in no particular order.
    ///
    /// An unknown product is `NotFound`; a product whose last variant was
    /// deleted is an empty `Ok` vector, which is a different thing.
    fn find_variants(&self, product_id: ProductId) -> Result<Vec<VariantRecord>, StoreError>;

    /// Write both cached aggregate fields on the product record.
    ///
    /// Implementations must be atomic with respect to the two fields: both
    /// updated together or neither.
    fn update_product_aggregates(
        &self,
        product_id: ProductId,
        summary: ProductSummary,
    ) -> Result<(), StoreError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn find_variants(&self, product_id: ProductId) -> Result<Vec<VariantRecord>, StoreError> {
        (**self).find_variants(product_id)
    }

    fn update_product_aggregates(
        &self,
        product_id: ProductId,
        summary: ProductSummary,
    ) -> Result<(), StoreError> {
        (**self).update_product_aggregates(product_id, summary)
    }
}
