use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use mercato_core::{LeaseId, TenantId, ValueObject};

/// Point-in-time classification of a tenancy interval.
///
/// Never stored: always derived fresh from a reference date, so there is no
/// staleness to manage — but callers must not cache it beyond a single
/// evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaseStatus {
    Upcoming,
    Active,
    Expired,
}

/// The dates a lease runs over (both ends inclusive).
///
/// `start_date <= end_date` is validated upstream and not re-checked here;
/// behavior on an inverted term is unspecified.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseTerm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LeaseTerm {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Classify the term relative to a reference date.
    ///
    /// Total over the three regions: `now < start` is `Upcoming`,
    /// `start <= now <= end` is `Active`, `now > end` is `Expired`. Both
    /// boundary dates count as `Active` — the last day of a lease is still a
    /// lease day (business policy; confirm with product before changing).
    pub fn status_on(&self, now: NaiveDate) -> LeaseStatus {
        if now < self.start_date {
            LeaseStatus::Upcoming
        } else if now > self.end_date {
            LeaseStatus::Expired
        } else {
            LeaseStatus::Active
        }
    }

    /// Classify against today's date (UTC).
    pub fn status_today(&self) -> LeaseStatus {
        self.status_on(Utc::now().date_naive())
    }

    /// Days until the term ends, counting from `now`.
    ///
    /// `Some(0)` on the last active day; `None` once expired.
    pub fn days_remaining(&self, now: NaiveDate) -> Option<i64> {
        if now > self.end_date {
            return None;
        }
        Some((self.end_date - now).num_days())
    }
}

impl ValueObject for LeaseTerm {}

/// A lease as supplied by the surrounding application's data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    pub id: LeaseId,
    pub tenant_id: TenantId,
    pub term: LeaseTerm,
}

impl Lease {
    pub fn new(id: LeaseId, tenant_id: TenantId, term: LeaseTerm) -> Self {
        Self {
            id,
            tenant_id,
            term,
        }
    }

    pub fn status_on(&self, now: NaiveDate) -> LeaseStatus {
        self.term.status_on(now)
    }

    pub fn status_today(&self) -> LeaseStatus {
        self.term.status_today()
    }
}
