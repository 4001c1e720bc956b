mod event;
mod highlight;
mod organizer;
mod reminder;
mod shared;

pub use event::{Event, EventStatus};
pub use highlight::{EventHighlight, HighlightItem, HighlightMediaKind};
pub use organizer::Organizer;
pub use reminder::PostEventReminder;
pub use shared::entity::{Entity, InvalidIDError, ID};
