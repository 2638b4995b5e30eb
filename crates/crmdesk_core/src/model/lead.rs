//! Lead domain model.
//!
//! # Responsibility
//! - Define the sales prospect record and its pipeline enums.
//! - Provide the id-less draft accepted by `CrmStore::add_lead`.
//!
//! # Invariants
//! - `id` is unique within the lead collection and never changes.
//! - `LeadStatus::Converted` is declared for display parity only; converted
//!   leads are removed from the collection instead of being flagged.

use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lead identifier, unique within the lead collection.
pub type LeadId = u32;

/// Pipeline stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
}

impl LeadStatus {
    /// Stable label used in logs and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Converted => "Converted",
        }
    }
}

/// Follow-up urgency of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Candidate prospect that has not become a paying client yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free-text service label, matched against catalog names by views.
    pub service: String,
    pub budget: Amount,
    pub status: LeadStatus,
    pub priority: Priority,
    pub created_at: NaiveDate,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Lead fields supplied by callers; the store assigns the id.
///
/// `status` is stored as given. Intake forms pass `LeadStatus::New`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub budget: Amount,
    pub status: LeadStatus,
    pub priority: Priority,
    pub created_at: NaiveDate,
    pub notes: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl NewLead {
    /// Creates an intake draft with status `New`, medium priority and no
    /// notes or engagement window.
    pub fn intake(
        name: impl Into<String>,
        email: impl Into<String>,
        service: impl Into<String>,
        budget: Amount,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            service: service.into(),
            budget,
            status: LeadStatus::New,
            priority: Priority::Medium,
            created_at,
            notes: String::new(),
            start_date: None,
            end_date: None,
        }
    }

    pub(crate) fn into_lead(self, id: LeadId) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            budget: self.budget,
            status: self.status,
            priority: self.priority,
            created_at: self.created_at,
            notes: self.notes,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
