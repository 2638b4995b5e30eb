//! Store construction options and the calendar source.
//!
//! # Responsibility
//! - Describe how a `CrmStore` starts (seeded or empty) and its billing cycle.
//! - Abstract "today" so conversions are deterministic under test.
//!
//! # Invariants
//! - "Today" is the UTC calendar date.

use chrono::{NaiveDate, Utc};

/// Days between a client's join date and their first payment date.
pub const DEFAULT_PAYMENT_INTERVAL_DAYS: u64 = 30;

/// Initial contents of the four collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Pre-populate with the demo data set.
    #[default]
    Seeded,
    /// Start with empty collections.
    Empty,
}

/// Options applied once when a store is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub seed: SeedMode,
    /// Offset from the conversion date to `Client::next_payment_date`.
    pub payment_interval_days: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: SeedMode::Seeded,
            payment_interval_days: DEFAULT_PAYMENT_INTERVAL_DAYS,
        }
    }
}

impl StoreConfig {
    /// Config for a store with no records.
    pub fn empty() -> Self {
        Self {
            seed: SeedMode::Empty,
            ..Self::default()
        }
    }
}

/// Source of the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SeedMode, StoreConfig, DEFAULT_PAYMENT_INTERVAL_DAYS};
    use chrono::NaiveDate;

    #[test]
    fn default_config_is_seeded_with_monthly_billing() {
        let config = StoreConfig::default();
        assert_eq!(config.seed, SeedMode::Seeded);
        assert_eq!(config.payment_interval_days, DEFAULT_PAYMENT_INTERVAL_DAYS);
    }

    #[test]
    fn empty_config_keeps_billing_interval() {
        let config = StoreConfig::empty();
        assert_eq!(config.seed, SeedMode::Empty);
        assert_eq!(config.payment_interval_days, 30);
    }

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
