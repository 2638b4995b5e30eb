//! Core domain logic for CrmDesk.
//! This crate is the single source of truth for the CRM record collections
//! and the rules that mutate and summarize them.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;

pub use catalog::ServiceCatalog;
pub use config::{Clock, FixedClock, SeedMode, StoreConfig, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{Client, ClientId, ClientStatus, NewClient};
pub use model::invoice::{Invoice, InvoiceId, InvoiceStatus, NewInvoice};
pub use model::lead::{Lead, LeadId, LeadStatus, NewLead, Priority};
pub use model::meeting::{Meeting, MeetingId, MeetingStatus, MeetingType, NewMeeting};
pub use model::offering::{NewOffering, OfferingId, OfferingStatus, ServiceOffering};
pub use model::Amount;
pub use query::metrics::{DashboardSummary, InvoiceTotals, MeetingStats, ServiceRevenue};
pub use store::{CrmSnapshot, CrmStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
