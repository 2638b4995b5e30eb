//! Invoice domain model.

use crate::model::client::{Client, ClientId};
use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice number. Numbering starts above 1000.
pub type InvoiceId = u32;

/// Lowest value invoice numbers are allocated above.
pub const INVOICE_NUMBER_FLOOR: InvoiceId = 1000;

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

/// Billing record tied to one client by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    /// Not checked against the client collection.
    pub client_id: ClientId,
    /// Denormalized copy of the client name at issue time.
    pub client_name: String,
    pub service: String,
    pub amount: Amount,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

/// Invoice fields supplied by callers; the store assigns the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub client_id: ClientId,
    pub client_name: String,
    pub service: String,
    pub amount: Amount,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl NewInvoice {
    /// Drafts a pending invoice for `client`, copying its id, name and
    /// service label and billing its recurring revenue.
    pub fn pending_for(client: &Client, issue_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            client_id: client.id,
            client_name: client.name.clone(),
            service: client.service.clone(),
            amount: client.revenue,
            status: InvoiceStatus::Pending,
            issue_date,
            due_date,
            paid_date: None,
        }
    }

    pub(crate) fn into_invoice(self, id: InvoiceId) -> Invoice {
        Invoice {
            id,
            client_id: self.client_id,
            client_name: self.client_name,
            service: self.service,
            amount: self.amount,
            status: self.status,
            issue_date: self.issue_date,
            due_date: self.due_date,
            paid_date: self.paid_date,
        }
    }
}
