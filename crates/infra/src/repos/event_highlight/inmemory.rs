use super::IEventHighlightRepo;
use crate::repos::shared::inmemory_repo::*;
use festivo_domain::{EventHighlight, ID};

pub struct InMemoryEventHighlightRepo {
    highlights: std::sync::Mutex<Vec<EventHighlight>>,
}

impl InMemoryEventHighlightRepo {
    pub fn new() -> Self {
        Self {
            highlights: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventHighlightRepo for InMemoryEventHighlightRepo {
    async fn insert(&self, highlight: &EventHighlight) -> anyhow::Result<()> {
        insert(highlight, &self.highlights);
        Ok(())
    }

    async fn find_by_event(&self, event_id: &ID) -> Option<EventHighlight> {
        // Highlights are keyed by the event they belong to
        find(event_id, &self.highlights)
    }
}
