//! CRM state container and its mutation operations.
//!
//! # Responsibility
//! - Hold the four record collections in newest-first display order.
//! - Apply add/convert/status mutations and allocate ids.
//!
//! # Invariants
//! - Inserts prepend; existing records keep their relative order.
//! - Conversion removes exactly one lead and adds exactly one client
//!   within a single `&mut self` call.
//! - `client_id` on invoices and meetings is stored without lookup.

use crate::config::{Clock, SeedMode, StoreConfig, SystemClock};
use crate::model::client::{Client, ClientId, NewClient};
use crate::model::invoice::{Invoice, InvoiceId, NewInvoice, INVOICE_NUMBER_FLOOR};
use crate::model::lead::{Lead, LeadId, LeadStatus, NewLead};
use crate::model::meeting::{Meeting, MeetingId, MeetingStatus, NewMeeting};
use crate::store::id_sequence::IdSequence;
use crate::store::seed;
use crate::store::{StoreError, StoreResult};
use chrono::{Days, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Owned copy of every collection, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmSnapshot {
    pub leads: Vec<Lead>,
    pub clients: Vec<Client>,
    pub invoices: Vec<Invoice>,
    pub meetings: Vec<Meeting>,
}

/// Authoritative in-memory holder of leads, clients, invoices and meetings.
///
/// Construct one per session and pass it by reference to consumers.
#[derive(Debug, Clone)]
pub struct CrmStore<C: Clock = SystemClock> {
    leads: Vec<Lead>,
    clients: Vec<Client>,
    invoices: Vec<Invoice>,
    meetings: Vec<Meeting>,
    lead_ids: IdSequence,
    client_ids: IdSequence,
    invoice_ids: IdSequence,
    meeting_ids: IdSequence,
    payment_interval: Days,
    clock: C,
}

impl CrmStore<SystemClock> {
    /// Creates a seeded store that dates conversions with the UTC wall clock.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default(), SystemClock)
    }
}

impl Default for CrmStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CrmStore<C> {
    /// Creates a store from `config`, reading "today" from `clock`.
    pub fn with_config(config: StoreConfig, clock: C) -> Self {
        let (leads, clients, invoices, meetings) = match config.seed {
            SeedMode::Seeded => (
                seed::seed_leads(),
                seed::seed_clients(),
                seed::seed_invoices(),
                seed::seed_meetings(),
            ),
            SeedMode::Empty => (Vec::new(), Vec::new(), Vec::new(), Vec::new()),
        };

        let lead_ids = IdSequence::after_existing(0, leads.iter().map(|lead| lead.id));
        let client_ids = IdSequence::after_existing(0, clients.iter().map(|client| client.id));
        let invoice_ids = IdSequence::after_existing(
            INVOICE_NUMBER_FLOOR,
            invoices.iter().map(|invoice| invoice.id),
        );
        let meeting_ids =
            IdSequence::after_existing(0, meetings.iter().map(|meeting| meeting.id));

        debug!(
            "event=store_init module=store status=ok seed={:?} leads={} clients={} invoices={} meetings={}",
            config.seed,
            leads.len(),
            clients.len(),
            invoices.len(),
            meetings.len()
        );

        Self {
            leads,
            clients,
            invoices,
            meetings,
            lead_ids,
            client_ids,
            invoice_ids,
            meeting_ids,
            payment_interval: Days::new(config.payment_interval_days),
            clock,
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn lead(&self, id: LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn invoice(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    pub fn meeting(&self, id: MeetingId) -> Option<&Meeting> {
        self.meetings.iter().find(|meeting| meeting.id == id)
    }

    /// Copies every collection for serialization or before/after checks.
    pub fn snapshot(&self) -> CrmSnapshot {
        CrmSnapshot {
            leads: self.leads.clone(),
            clients: self.clients.clone(),
            invoices: self.invoices.clone(),
            meetings: self.meetings.clone(),
        }
    }

    /// Adds a lead at the front of the collection and returns its id.
    pub fn add_lead(&mut self, draft: NewLead) -> LeadId {
        let id = self.lead_ids.next_id();
        let lead = draft.into_lead(id);
        debug!(
            "event=lead_added module=store status=ok id={} lead_status={}",
            id,
            lead.status.as_str()
        );
        self.leads.insert(0, lead);
        id
    }

    /// Converts a lead into an active client and removes the lead.
    ///
    /// The client joins today, has its first payment due after the
    /// configured interval, and carries the lead budget as revenue.
    ///
    /// # Errors
    /// - `StoreError::LeadNotFound` when no lead has `lead_id`; no
    ///   collection is modified.
    pub fn convert_lead_to_client(&mut self, lead_id: LeadId) -> StoreResult<ClientId> {
        let Some(index) = self.leads.iter().position(|lead| lead.id == lead_id) else {
            warn!(
                "event=lead_convert module=store status=not_found lead_id={}",
                lead_id
            );
            return Err(StoreError::LeadNotFound(lead_id));
        };

        let join_date = self.clock.today();
        let next_payment_date = self.next_payment_date(join_date);
        let lead = self.leads.remove(index);
        let client_id = self.client_ids.next_id();
        let client = NewClient::from_converted_lead(lead, join_date, next_payment_date)
            .into_client(client_id);
        self.clients.insert(0, client);

        debug!(
            "event=lead_convert module=store status=ok lead_id={} client_id={}",
            lead_id, client_id
        );
        Ok(client_id)
    }

    /// Replaces the status of one lead. Any status may follow any other.
    ///
    /// # Errors
    /// - `StoreError::LeadNotFound` when no lead has `lead_id`.
    pub fn update_lead_status(&mut self, lead_id: LeadId, status: LeadStatus) -> StoreResult<()> {
        let Some(lead) = self.leads.iter_mut().find(|lead| lead.id == lead_id) else {
            warn!(
                "event=lead_status module=store status=not_found lead_id={}",
                lead_id
            );
            return Err(StoreError::LeadNotFound(lead_id));
        };

        debug!(
            "event=lead_status module=store status=ok lead_id={} from={} to={}",
            lead_id,
            lead.status.as_str(),
            status.as_str()
        );
        lead.status = status;
        Ok(())
    }

    /// Adds a client at the front of the collection and returns its id.
    pub fn add_client(&mut self, draft: NewClient) -> ClientId {
        let id = self.client_ids.next_id();
        self.clients.insert(0, draft.into_client(id));
        debug!("event=client_added module=store status=ok id={}", id);
        id
    }

    /// Adds an invoice at the front of the collection and returns its number.
    ///
    /// Numbers are always above 1000, so the first invoice of an empty
    /// store is 1001.
    pub fn add_invoice(&mut self, draft: NewInvoice) -> InvoiceId {
        let id = self.invoice_ids.next_id();
        let client_id = draft.client_id;
        self.invoices.insert(0, draft.into_invoice(id));
        debug!(
            "event=invoice_added module=store status=ok id={} client_id={}",
            id, client_id
        );
        id
    }

    /// Adds a meeting at the front of the collection and returns its id.
    pub fn add_meeting(&mut self, draft: NewMeeting) -> MeetingId {
        let id = self.meeting_ids.next_id();
        let client_id = draft.client_id;
        self.meetings.insert(0, draft.into_meeting(id));
        debug!(
            "event=meeting_added module=store status=ok id={} client_id={}",
            id, client_id
        );
        id
    }

    /// Replaces the status of one meeting. Any status may follow any other.
    ///
    /// # Errors
    /// - `StoreError::MeetingNotFound` when no meeting has `meeting_id`.
    pub fn update_meeting_status(
        &mut self,
        meeting_id: MeetingId,
        status: MeetingStatus,
    ) -> StoreResult<()> {
        let Some(meeting) = self
            .meetings
            .iter_mut()
            .find(|meeting| meeting.id == meeting_id)
        else {
            warn!(
                "event=meeting_status module=store status=not_found meeting_id={}",
                meeting_id
            );
            return Err(StoreError::MeetingNotFound(meeting_id));
        };

        debug!(
            "event=meeting_status module=store status=ok meeting_id={} from={} to={}",
            meeting_id,
            meeting.status.as_str(),
            status.as_str()
        );
        meeting.status = status;
        Ok(())
    }

    fn next_payment_date(&self, join_date: NaiveDate) -> NaiveDate {
        join_date
            .checked_add_days(self.payment_interval)
            .unwrap_or(NaiveDate::MAX)
    }
}
