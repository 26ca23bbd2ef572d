//! Leasing domain: tenancy intervals and their point-in-time status.
//!
//! Pure domain logic only — lease records are supplied by the surrounding
//! application; nothing here touches storage or the wall clock except the
//! explicit `*_today` conveniences.

pub mod lease;

pub use lease::{Lease, LeaseStatus, LeaseTerm};
