//! Domain model for the CRM record collections.
//!
//! # Responsibility
//! - Define the four record shapes owned by the store (lead, client,
//!   invoice, meeting) and their caller-facing drafts.
//! - Define the service offering shape used by the catalog.
//!
//! # Invariants
//! - Record ids are assigned by the owning collection, never by callers.
//! - Cross-record links (`client_id`) are plain value copies.

pub mod client;
pub mod invoice;
pub mod lead;
pub mod meeting;
pub mod offering;

/// Whole currency units. Budgets, revenue and invoice amounts are never
/// negative, so an unsigned integer carries them directly.
pub type Amount = u64;

/// Sums amounts, clamping at `Amount::MAX` instead of overflowing.
pub fn saturating_total(amounts: impl IntoIterator<Item = Amount>) -> Amount {
    amounts
        .into_iter()
        .fold(0, |total: Amount, amount| total.saturating_add(amount))
}

#[cfg(test)]
mod tests {
    use super::{saturating_total, Amount};

    #[test]
    fn saturating_total_clamps_at_max() {
        assert_eq!(saturating_total([Amount::MAX / 2 + 1, Amount::MAX / 2 + 1]), Amount::MAX);
        assert_eq!(saturating_total([Amount::MAX, 1, 1]), Amount::MAX);
        assert_eq!(saturating_total([2500, 3200]), 5700);
        assert_eq!(saturating_total(Vec::new()), 0);
    }
}
