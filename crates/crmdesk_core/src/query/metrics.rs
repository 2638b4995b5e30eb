//! Dashboard and analytics aggregates.
//!
//! # Invariants
//! - Revenue means money received: the sum of `Paid` invoice amounts.
//! - Recurring revenue is the sum of `Client::revenue` over all clients.
//! - Ratios over empty inputs are reported as zero, never NaN.

use crate::config::Clock;
use crate::model::client::Client;
use crate::model::invoice::{Invoice, InvoiceStatus};
use crate::model::meeting::{Meeting, MeetingStatus};
use crate::model::{saturating_total, Amount};
use crate::store::CrmStore;
use serde::Serialize;

const MINUTES_PER_HOUR: u64 = 60;

/// Invoice amounts bucketed by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub paid: Amount,
    pub pending: Amount,
    pub overdue: Amount,
}

/// Per-service client breakdown used by the analytics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRevenue {
    pub service: String,
    pub active_clients: usize,
    /// Sum of `Client::total_paid` for the service.
    pub total_paid: Amount,
    /// Sum of `Client::revenue` for the service.
    pub monthly_revenue: Amount,
}

/// Meeting counts shown on the calendar cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingStats {
    pub scheduled: usize,
    pub completed: usize,
    /// Total booked duration in hours, rounded half up.
    pub total_hours: u64,
}

/// Headline figures shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: Amount,
    pub active_clients: usize,
    pub open_leads: usize,
    pub monthly_recurring_revenue: Amount,
    /// Percentage with one decimal place.
    pub conversion_rate: f64,
    pub average_revenue_per_client: Amount,
    pub invoice_totals: InvoiceTotals,
}

impl DashboardSummary {
    pub fn compute<C: Clock>(store: &CrmStore<C>) -> Self {
        let invoice_totals = invoice_totals(store.invoices());
        let clients = store.clients();
        Self {
            total_revenue: invoice_totals.paid,
            active_clients: active_client_count(clients),
            open_leads: store.leads().len(),
            monthly_recurring_revenue: monthly_recurring_revenue(clients),
            conversion_rate: conversion_rate(clients.len(), store.leads().len()),
            average_revenue_per_client: average_revenue_per_client(
                invoice_totals.paid,
                clients.len(),
            ),
            invoice_totals,
        }
    }
}

pub fn invoice_totals(invoices: &[Invoice]) -> InvoiceTotals {
    invoices
        .iter()
        .fold(InvoiceTotals::default(), |mut totals, invoice| {
            match invoice.status {
                InvoiceStatus::Paid => totals.paid = totals.paid.saturating_add(invoice.amount),
                InvoiceStatus::Pending => {
                    totals.pending = totals.pending.saturating_add(invoice.amount)
                }
                InvoiceStatus::Overdue => {
                    totals.overdue = totals.overdue.saturating_add(invoice.amount)
                }
            }
            totals
        })
}

/// Sum of paid invoice amounts.
pub fn total_revenue(invoices: &[Invoice]) -> Amount {
    invoice_totals(invoices).paid
}

pub fn active_client_count(clients: &[Client]) -> usize {
    clients.iter().filter(|client| client.is_active()).count()
}

pub fn monthly_recurring_revenue(clients: &[Client]) -> Amount {
    saturating_total(clients.iter().map(|client| client.revenue))
}

/// Sum of `Client::total_paid` across all clients.
pub fn total_collected(clients: &[Client]) -> Amount {
    saturating_total(clients.iter().map(|client| client.total_paid))
}

/// Share of clients among clients plus open leads, as a percentage rounded
/// to one decimal place. Zero when there are no clients.
pub fn conversion_rate(client_count: usize, lead_count: usize) -> f64 {
    if client_count == 0 {
        return 0.0;
    }
    let percent = client_count as f64 / (client_count + lead_count) as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}

/// Received revenue per client, rounded half up. Zero when there are no
/// clients.
pub fn average_revenue_per_client(total_revenue: Amount, client_count: usize) -> Amount {
    if client_count == 0 {
        return 0;
    }
    div_round_half_up(total_revenue, client_count as Amount)
}

/// Counts scheduled and completed meetings and the booked time in whole
/// hours, rounded half up.
pub fn meeting_stats(meetings: &[Meeting]) -> MeetingStats {
    let count_with = |status: MeetingStatus| {
        meetings
            .iter()
            .filter(|meeting| meeting.status == status)
            .count()
    };
    let total_minutes = saturating_total(
        meetings
            .iter()
            .map(|meeting| u64::from(meeting.duration_minutes)),
    );

    MeetingStats {
        scheduled: count_with(MeetingStatus::Scheduled),
        completed: count_with(MeetingStatus::Completed),
        total_hours: div_round_half_up(total_minutes, MINUTES_PER_HOUR),
    }
}

/// Breaks clients down by each label in `services`, sorted by
/// `total_paid` descending. Labels with no matching client are kept with
/// zero totals.
pub fn service_revenue<S: AsRef<str>>(clients: &[Client], services: &[S]) -> Vec<ServiceRevenue> {
    let mut rows = services
        .iter()
        .map(|service| {
            let service = service.as_ref();
            let matching = clients.iter().filter(|client| client.service == service);
            let (active_clients, total_paid, monthly_revenue) = matching.fold(
                (0usize, 0 as Amount, 0 as Amount),
                |(count, paid, monthly), client| {
                    (
                        count + 1,
                        paid.saturating_add(client.total_paid),
                        monthly.saturating_add(client.revenue),
                    )
                },
            );
            ServiceRevenue {
                service: service.to_string(),
                active_clients,
                total_paid,
                monthly_revenue,
            }
        })
        .collect::<Vec<_>>();

    rows.sort_by(|left, right| right.total_paid.cmp(&left.total_paid));
    rows
}

/// Service with the highest `total_paid`, if any label was given.
pub fn top_service<S: AsRef<str>>(clients: &[Client], services: &[S]) -> Option<ServiceRevenue> {
    service_revenue(clients, services).into_iter().next()
}

// `numerator / denominator` rounded half up; the remainder comparison keeps
// the computation inside `u64`.
fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    quotient + u64::from(remainder >= denominator - denominator / 2)
}

#[cfg(test)]
mod tests {
    use super::{average_revenue_per_client, conversion_rate, div_round_half_up};

    #[test]
    fn conversion_rate_rounds_to_one_decimal() {
        assert_eq!(conversion_rate(5, 2), 71.4);
        assert_eq!(conversion_rate(6, 1), 85.7);
        assert_eq!(conversion_rate(3, 0), 100.0);
    }

    #[test]
    fn conversion_rate_is_zero_without_clients() {
        assert_eq!(conversion_rate(0, 4), 0.0);
        assert_eq!(conversion_rate(0, 0), 0.0);
    }

    #[test]
    fn average_revenue_rounds_half_up() {
        assert_eq!(average_revenue_per_client(5700, 5), 1140);
        assert_eq!(average_revenue_per_client(10, 4), 3);
        assert_eq!(average_revenue_per_client(1000, 0), 0);
    }

    #[test]
    fn average_revenue_handles_amounts_near_max() {
        assert_eq!(average_revenue_per_client(u64::MAX, 1), u64::MAX);
        assert_eq!(average_revenue_per_client(u64::MAX, 2), u64::MAX / 2 + 1);
        assert_eq!(average_revenue_per_client(u64::MAX - 1, 2), u64::MAX / 2);
    }

    #[test]
    fn div_round_half_up_rounds_exact_halves_up() {
        assert_eq!(div_round_half_up(90, 60), 2);
        assert_eq!(div_round_half_up(89, 60), 1);
        assert_eq!(div_round_half_up(7, 2), 4);
        assert_eq!(div_round_half_up(8, 3), 3);
        assert_eq!(div_round_half_up(7, 3), 2);
    }
}
