use serde::{Deserialize, Serialize};

use mercato_core::ValueObject;

use crate::variant::VariantRecord;

/// Derived summary of a product's variant set.
///
/// The "no variants" case is a real state of the domain, not a product priced
/// at zero, so it gets its own variant here. It collapses to zeroed fields
/// only at the storage boundary (see [`ProductSummary`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductAggregate {
    /// The product currently owns no variants (e.g., its last variant was
    /// deleted). Tolerated rather than forbidden.
    Empty,
    /// Summary over a non-empty variant set.
    Computed {
        /// Minimum price across variants (smallest currency unit). Ties are
        /// irrelevant: any equal-minimum variant yields the same value.
        min_price: u64,
        /// Total stock across variants.
        total_stock: u64,
    },
}

impl ProductAggregate {
    /// Fold a variant set into its aggregate.
    ///
    /// Deterministic and order-insensitive; the empty set maps to `Empty`.
    pub fn of(variants: &[VariantRecord]) -> Self {
        let mut iter = variants.iter();
        let Some(first) = iter.next() else {
            return Self::Empty;
        };

        let mut min_price = first.price;
        let mut total_stock = first.stock;
        for v in iter {
            min_price = min_price.min(v.price);
            total_stock += v.stock;
        }

        Self::Computed {
            min_price,
            total_stock,
        }
    }

    /// Collapse to the storage-boundary representation.
    pub fn summary(self) -> ProductSummary {
        ProductSummary::from(self)
    }
}

/// The two cached aggregate fields as persisted on the product record.
///
/// This is the storage-boundary shape: `Empty` has already collapsed to
/// zeroed fields, so a stored `{price: 0, stock: 0}` may mean either "no
/// variants" or "free and out of stock". Code that needs to tell those apart
/// works with [`ProductAggregate`] instead.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Minimum variant price (smallest currency unit); zero when no variants.
    pub price: u64,
    /// Total variant stock; zero when no variants.
    pub stock: u64,
}

impl From<ProductAggregate> for ProductSummary {
    fn from(aggregate: ProductAggregate) -> Self {
        match aggregate {
            ProductAggregate::Empty => Self { price: 0, stock: 0 },
            ProductAggregate::Computed {
                min_price,
                total_stock,
            } => Self {
                price: min_price,
                stock: total_stock,
            },
        }
    }
}

impl ValueObject for ProductSummary {}
