mod event;
mod event_highlight;
mod organizer;
mod shared;

use event::{IEventRepo, InMemoryEventRepo};
use event_highlight::{IEventHighlightRepo, InMemoryEventHighlightRepo};
use organizer::{IOrganizerRepo, InMemoryOrganizerRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub event_highlights: Arc<dyn IEventHighlightRepo>,
    pub organizers: Arc<dyn IOrganizerRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            event_highlights: Arc::new(InMemoryEventHighlightRepo::new()),
            organizers: Arc::new(InMemoryOrganizerRepo::new()),
        }
    }
}
