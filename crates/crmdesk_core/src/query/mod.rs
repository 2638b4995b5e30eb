//! Read-side derivations over store collections.
//!
//! # Responsibility
//! - Provide the search/filter predicates used by list views.
//! - Compute dashboard aggregates (revenue totals, conversion rate).
//!
//! # Invariants
//! - Every function is pure: it borrows slices and never mutates them.
//! - Filtered results preserve collection order.

pub mod filters;
pub mod integrity;
pub mod metrics;
