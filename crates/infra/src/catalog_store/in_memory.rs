use std::collections::HashMap;
use std::sync::RwLock;

use mercato_catalog::{ProductSummary, VariantRecord};
use mercato_core::{ProductId, VariantId};

use super::r#trait::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default)]
struct ProductRow {
    summary: ProductSummary,
    variants: HashMap<VariantId, VariantRecord>,
}

/// In-memory catalog store.
///
/// Intended for tests/dev. Variant mutations here stand in for the inventory
/// management surface; they deliberately do not touch the cached summary —
/// keeping it current is the aggregation service's job.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    products: RwLock<HashMap<ProductId, ProductRow>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product with no variants and a zeroed summary.
    pub fn insert_product(&self, product_id: ProductId) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Write("lock poisoned".to_string()))?;
        products.entry(product_id).or_default();
        Ok(())
    }

    /// Create or update a variant on an existing product.
    pub fn put_variant(
        &self,
        product_id: ProductId,
        variant_id: VariantId,
        record: VariantRecord,
    ) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Write("lock poisoned".to_string()))?;
        let row = products
            .get_mut(&product_id)
            .ok_or(StoreError::NotFound(product_id))?;
        row.variants.insert(variant_id, record);
        Ok(())
    }

    /// Delete a variant (deleting the last one is allowed).
    pub fn remove_variant(
        &self,
        product_id: ProductId,
        variant_id: VariantId,
    ) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Write("lock poisoned".to_string()))?;
        let row = products
            .get_mut(&product_id)
            .ok_or(StoreError::NotFound(product_id))?;
        row.variants.remove(&variant_id);
        Ok(())
    }

    /// The cached summary as currently stored on the product record.
    pub fn summary(&self, product_id: ProductId) -> Result<ProductSummary, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::Read("lock poisoned".to_string()))?;
        products
            .get(&product_id)
            .map(|row| row.summary)
            .ok_or(StoreError::NotFound(product_id))
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn find_variants(&self, product_id: ProductId) -> Result<Vec<VariantRecord>, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::Read("lock poisoned".to_string()))?;
        let row = products
            .get(&product_id)
            .ok_or(StoreError::NotFound(product_id))?;
        Ok(row.variants.values().copied().collect())
    }

    fn update_product_aggregates(
        &self,
        product_id: ProductId,
        summary: ProductSummary,
    ) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Write("lock poisoned".to_string()))?;
        let row = products
            .get_mut(&product_id)
            .ok_or(StoreError::NotFound(product_id))?;
        // Single-field assignment keeps both aggregate values atomic.
        row.summary = summary;
        Ok(())
    }
}
