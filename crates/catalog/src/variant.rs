use serde::{Deserialize, Serialize};

use mercato_core::ValueObject;

/// Pricing/stock attributes of one product variant, as read back for
/// aggregation.
///
/// Variants are created and mutated by inventory management; from the
/// aggregation side they are read-only input, so this carries exactly the two
/// fields the derivation needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Price in the smallest currency unit (e.g., cents). Non-negative by type.
    pub price: u64,
    /// Units on hand for this variant.
    pub stock: u64,
}

impl VariantRecord {
    pub fn new(price: u64, stock: u64) -> Self {
        Self { price, stock }
    }
}

impl ValueObject for VariantRecord {}
