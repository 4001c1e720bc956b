use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// The account hosting an `Event` and the recipient of all event
/// lifecycle notifications. The email address is optional: organizers
/// imported from external registries may not have one yet, in which
/// case they simply cannot be notified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organizer {
    pub id: ID,
    pub full_name: String,
    pub email: Option<String>,
}

impl Entity for Organizer {
    fn id(&self) -> &ID {
        &self.id
    }
}
