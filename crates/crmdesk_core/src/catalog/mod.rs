//! Catalog of service offerings.
//!
//! # Responsibility
//! - Hold the service lines sold by the business, newest first.
//! - Provide the service labels used by lead/client filters and analytics.
//!
//! # Invariants
//! - Generated offering ids (`service-<n>`) are never reused.

mod service_catalog;

pub use service_catalog::ServiceCatalog;
