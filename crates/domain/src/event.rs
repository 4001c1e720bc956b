use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// An `Event` is a gathering hosted by an `Organizer`. It has to be
/// approved by a community manager before it becomes visible, and once
/// the event date has passed the organizer is expected to submit an
/// `EventHighlight` for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: ID,
    pub title: String,
    /// When the event takes place, in millis since epoch
    pub event_date: i64,
    pub status: EventStatus,
    pub organizer_id: ID,
    pub created: i64,
    pub updated: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}
