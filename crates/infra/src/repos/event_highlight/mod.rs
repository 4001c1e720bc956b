mod inmemory;

pub use inmemory::InMemoryEventHighlightRepo;
use festivo_domain::{EventHighlight, ID};

#[async_trait::async_trait]
pub trait IEventHighlightRepo: Send + Sync {
    async fn insert(&self, highlight: &EventHighlight) -> anyhow::Result<()>;
    async fn find_by_event(&self, event_id: &ID) -> Option<EventHighlight>;
}
