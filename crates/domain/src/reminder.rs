use crate::shared::entity::ID;
use serde::Serialize;

/// A `PostEventReminder` represents one pending nag to an `Organizer`
/// about a missing `EventHighlight`: which event it concerns, which
/// attempt in the escalation sequence it is (1-based) and when it is
/// due to fire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostEventReminder {
    /// The `Event` this reminder is associated with
    pub event_id: ID,
    /// 1-based position in the escalation sequence
    pub attempt: u32,
    /// The timestamp in millis at which this attempt is due
    pub scheduled_for: i64,
}
