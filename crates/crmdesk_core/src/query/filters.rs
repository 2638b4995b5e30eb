//! Search and filter predicates for list views.
//!
//! Text search is a case-insensitive substring match. An empty search term
//! matches every record.

use crate::model::client::{Client, ClientId};
use crate::model::invoice::{Invoice, InvoiceStatus};
use crate::model::lead::Lead;
use crate::model::meeting::{Meeting, MeetingStatus};
use crate::model::{saturating_total, Amount};
use chrono::NaiveDate;

/// Service selector value meaning "no service filter".
pub const ALL_SERVICES: &str = "all-services";

/// Number of upcoming meetings listed by the calendar sidebar.
pub const UPCOMING_MEETINGS_LIMIT: usize = 5;

/// Lead list filter.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// Matched against name and email.
    pub search: String,
    /// Exact service label; `None`, empty or `ALL_SERVICES` disables it.
    pub service: Option<String>,
}

/// Invoice list filter.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    /// Matched against client name, service and the invoice number.
    pub search: String,
    pub status: Option<InvoiceStatus>,
}

pub fn filter_leads<'a>(leads: &'a [Lead], filter: &LeadFilter) -> Vec<&'a Lead> {
    let needle = filter.search.to_lowercase();
    let service = filter
        .service
        .as_deref()
        .filter(|service| !service.is_empty() && *service != ALL_SERVICES);

    leads
        .iter()
        .filter(|lead| {
            contains_folded(&lead.name, &needle) || contains_folded(&lead.email, &needle)
        })
        .filter(|lead| service.map_or(true, |service| lead.service == service))
        .collect()
}

pub fn filter_clients<'a>(clients: &'a [Client], search: &str) -> Vec<&'a Client> {
    let needle = search.to_lowercase();
    clients
        .iter()
        .filter(|client| {
            contains_folded(&client.name, &needle)
                || contains_folded(&client.email, &needle)
                || contains_folded(&client.service, &needle)
        })
        .collect()
}

pub fn filter_invoices<'a>(invoices: &'a [Invoice], filter: &InvoiceFilter) -> Vec<&'a Invoice> {
    let needle = filter.search.to_lowercase();
    invoices
        .iter()
        .filter(|invoice| {
            contains_folded(&invoice.client_name, &needle)
                || contains_folded(&invoice.service, &needle)
                || invoice.id.to_string().contains(filter.search.as_str())
        })
        .filter(|invoice| filter.status.map_or(true, |status| invoice.status == status))
        .collect()
}

/// Invoices billed to `client_id`, in collection order.
pub fn invoices_for_client(invoices: &[Invoice], client_id: ClientId) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|invoice| invoice.client_id == client_id)
        .collect()
}

/// Sum of `Pending` invoice amounts billed to `client_id`.
pub fn pending_amount_for_client(invoices: &[Invoice], client_id: ClientId) -> Amount {
    saturating_total(
        invoices
            .iter()
            .filter(|invoice| {
                invoice.client_id == client_id && invoice.status == InvoiceStatus::Pending
            })
            .map(|invoice| invoice.amount),
    )
}

/// First `limit` scheduled meetings in collection order.
pub fn upcoming_meetings(meetings: &[Meeting], limit: usize) -> Vec<&Meeting> {
    meetings
        .iter()
        .filter(|meeting| meeting.status == MeetingStatus::Scheduled)
        .take(limit)
        .collect()
}

/// Meetings on `date` regardless of status.
pub fn meetings_on(meetings: &[Meeting], date: NaiveDate) -> Vec<&Meeting> {
    meetings
        .iter()
        .filter(|meeting| meeting.date == date)
        .collect()
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
