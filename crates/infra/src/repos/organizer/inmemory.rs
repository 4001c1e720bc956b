use super::IOrganizerRepo;
use crate::repos::shared::inmemory_repo::*;
use festivo_domain::{Organizer, ID};

pub struct InMemoryOrganizerRepo {
    organizers: std::sync::Mutex<Vec<Organizer>>,
}

impl InMemoryOrganizerRepo {
    pub fn new() -> Self {
        Self {
            organizers: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IOrganizerRepo for InMemoryOrganizerRepo {
    async fn insert(&self, organizer: &Organizer) -> anyhow::Result<()> {
        insert(organizer, &self.organizers);
        Ok(())
    }

    async fn find(&self, organizer_id: &ID) -> Option<Organizer> {
        find(organizer_id, &self.organizers)
    }
}
