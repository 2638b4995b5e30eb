//! In-memory domain state store.
//!
//! # Responsibility
//! - Own the lead/client/invoice/meeting collections for one session.
//! - Expose mutation operations as the only write path.
//!
//! # Invariants
//! - Ids are allocated from per-collection monotonic counters and are never
//!   reused, even after a lead is removed by conversion.
//! - A not-found mutation leaves every collection untouched.

use crate::model::lead::LeadId;
use crate::model::meeting::MeetingId;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod crm_store;
pub mod id_sequence;
pub mod seed;

pub use crm_store::{CrmSnapshot, CrmStore};
pub use id_sequence::IdSequence;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for id-addressed mutations.
///
/// Returned without modifying state; callers that only care about the
/// happy path may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    LeadNotFound(LeadId),
    MeetingNotFound(MeetingId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadNotFound(id) => write!(f, "lead not found: {id}"),
            Self::MeetingNotFound(id) => write!(f, "meeting not found: {id}"),
        }
    }
}

impl Error for StoreError {}
