//! Client domain model.
//!
//! # Responsibility
//! - Define the paying account record.
//! - Map a converted lead onto a fresh client draft.
//!
//! # Invariants
//! - `id` is unique within the client collection.
//! - A client built from a lead starts `Active` with `total_paid == 0`.

use crate::model::lead::Lead;
use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client identifier, unique within the client collection.
pub type ClientId = u32;

/// Account standing of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
}

/// Paying account, created directly or from a converted lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub status: ClientStatus,
    /// Recurring monthly amount.
    pub revenue: Amount,
    pub join_date: NaiveDate,
    /// Cumulative amount received so far.
    pub total_paid: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Client {
    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

/// Client fields supplied by callers; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub status: ClientStatus,
    pub revenue: Amount,
    pub join_date: NaiveDate,
    pub total_paid: Amount,
    pub next_payment_date: Option<NaiveDate>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
}

impl NewClient {
    /// Builds the client draft for a converted lead.
    ///
    /// Contact fields and the service label move over unchanged; the lead
    /// budget becomes the recurring revenue.
    pub fn from_converted_lead(
        lead: Lead,
        join_date: NaiveDate,
        next_payment_date: NaiveDate,
    ) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            service: lead.service,
            status: ClientStatus::Active,
            revenue: lead.budget,
            join_date,
            total_paid: 0,
            next_payment_date: Some(next_payment_date),
            department: None,
            location: None,
            role: None,
        }
    }

    pub(crate) fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            status: self.status,
            revenue: self.revenue,
            join_date: self.join_date,
            total_paid: self.total_paid,
            next_payment_date: self.next_payment_date,
            department: self.department,
            location: self.location,
            role: self.role,
        }
    }
}
