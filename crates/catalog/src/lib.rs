//! Catalog domain: products, variants, and derived product aggregates.
//!
//! This crate contains the pure derivation logic only (no IO, no storage).
//! Persistence and the recompute service live in `mercato-infra`.

pub mod aggregate;
pub mod variant;

pub use aggregate::{ProductAggregate, ProductSummary};
pub use variant::VariantRecord;
