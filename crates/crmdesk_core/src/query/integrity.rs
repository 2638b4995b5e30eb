//! Read-only report of client references that do not resolve.
//!
//! The store accepts any `client_id` on invoices and meetings. This report
//! lets callers surface dangling references without changing that contract.

use crate::model::client::{Client, ClientId};
use crate::model::invoice::{Invoice, InvoiceId};
use crate::model::meeting::{Meeting, MeetingId};
use std::collections::HashSet;

/// Record whose `client_id` has no matching client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DanglingClientRef {
    Invoice {
        invoice_id: InvoiceId,
        client_id: ClientId,
    },
    Meeting {
        meeting_id: MeetingId,
        client_id: ClientId,
    },
}

/// Lists invoices then meetings whose `client_id` is not a known client.
pub fn dangling_client_refs(
    clients: &[Client],
    invoices: &[Invoice],
    meetings: &[Meeting],
) -> Vec<DanglingClientRef> {
    let known = clients.iter().map(|client| client.id).collect::<HashSet<_>>();

    let invoice_refs = invoices
        .iter()
        .filter(|invoice| !known.contains(&invoice.client_id))
        .map(|invoice| DanglingClientRef::Invoice {
            invoice_id: invoice.id,
            client_id: invoice.client_id,
        });
    let meeting_refs = meetings
        .iter()
        .filter(|meeting| !known.contains(&meeting.client_id))
        .map(|meeting| DanglingClientRef::Meeting {
            meeting_id: meeting.id,
            client_id: meeting.client_id,
        });

    invoice_refs.chain(meeting_refs).collect()
}
