use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Post-event report submitted by the organizer: attendance numbers,
/// ticket sales and a gallery of media items. At most one per `Event`,
/// keyed by the event id. Its existence is what tells the reminder
/// pipeline that the organizer is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventHighlight {
    pub event_id: ID,
    pub attendance: i64,
    pub ticket_sales: i64,
    pub highlights: Vec<HighlightItem>,
    pub created: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightItem {
    pub title: String,
    pub kind: HighlightMediaKind,
    /// Only required for videos (youtube url)
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMediaKind {
    Image,
    Video,
}

impl Entity for EventHighlight {
    fn id(&self) -> &ID {
        &self.event_id
    }
}
