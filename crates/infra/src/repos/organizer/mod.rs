mod inmemory;

pub use inmemory::InMemoryOrganizerRepo;
use festivo_domain::{Organizer, ID};

#[async_trait::async_trait]
pub trait IOrganizerRepo: Send + Sync {
    async fn insert(&self, organizer: &Organizer) -> anyhow::Result<()>;
    async fn find(&self, organizer_id: &ID) -> Option<Organizer>;
}
