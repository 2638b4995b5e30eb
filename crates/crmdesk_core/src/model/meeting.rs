//! Meeting domain model.
//!
//! # Responsibility
//! - Define the appointment record and its type/status enums.
//! - Keep the `HH:MM` wire shape for the start time.
//!
//! # Invariants
//! - `id` is unique within the meeting collection.
//! - `duration_minutes` is expected to be positive; the store does not check.

use crate::model::client::{Client, ClientId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Meeting identifier, unique within the meeting collection.
pub type MeetingId = u32;

/// Kind of appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingType {
    #[serde(rename = "Initial Consultation")]
    InitialConsultation,
    #[serde(rename = "Follow-up")]
    FollowUp,
    #[serde(rename = "Project Review")]
    ProjectReview,
    Support,
}

/// Outcome state of a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    /// Stable label used in logs and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Scheduled appointment tied to one client by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    pub client_id: ClientId,
    /// Denormalized copy of the client name at scheduling time.
    pub client_name: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: MeetingType,
    pub status: MeetingStatus,
}

/// Meeting fields supplied by callers; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeeting {
    pub client_id: ClientId,
    pub client_name: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub kind: MeetingType,
    pub status: MeetingStatus,
}

impl NewMeeting {
    /// Drafts a `Scheduled` meeting with `client`, copying its id and name.
    pub fn scheduled_with(
        client: &Client,
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        duration_minutes: u32,
        kind: MeetingType,
    ) -> Self {
        Self {
            client_id: client.id,
            client_name: client.name.clone(),
            title: title.into(),
            date,
            time,
            duration_minutes,
            kind,
            status: MeetingStatus::Scheduled,
        }
    }

    pub(crate) fn into_meeting(self, id: MeetingId) -> Meeting {
        Meeting {
            id,
            client_id: self.client_id,
            client_name: self.client_name,
            title: self.title,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            kind: self.kind,
            status: self.status,
        }
    }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .map_err(|err| D::Error::custom(format!("invalid meeting time `{raw}`: {err}")))
    }
}
