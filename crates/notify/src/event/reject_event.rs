use super::subscribers::SendRejectionEmailOnEventRejected;
use crate::shared::usecase::{Subscriber, UseCase};
use festivo_domain::{Event, EventStatus, ID};
use festivo_infra::FestivoContext;

/// Marks a pending event as rejected and notifies the organizer with
/// the reason, if one was given.
#[derive(Debug)]
pub struct RejectEventUseCase {
    pub event_id: ID,
    pub reason: Option<String>,
}

#[derive(Debug)]
pub struct EventRejection {
    pub event: Event,
    pub reason: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for RejectEventUseCase {
    type Response = EventRejection;

    type Error = UseCaseError;

    const NAME: &'static str = "RejectEvent";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let mut event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        event.status = EventStatus::Rejected;
        event.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .events
            .save(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(EventRejection {
            event,
            reason: self.reason.take(),
        })
    }

    fn subscribers(&self) -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendRejectionEmailOnEventRejected)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use festivo_domain::Organizer;
    use festivo_infra::{Config, EmailType, FestivoContext, InMemoryMailer};
    use std::sync::Arc;
    use std::time::Duration;

    async fn setup() -> (FestivoContext, Arc<InMemoryMailer>, Event) {
        let mailer = Arc::new(InMemoryMailer::new());
        let ctx = FestivoContext::create(Config::new(), mailer.clone());

        let organizer = Organizer {
            id: Default::default(),
            full_name: "Ada Lovelace".into(),
            email: Some("ada@example.com".into()),
        };
        ctx.repos.organizers.insert(&organizer).await.unwrap();

        let event = Event {
            id: Default::default(),
            title: "RustFest".into(),
            event_date: ctx.sys.get_timestamp_millis(),
            status: EventStatus::Pending,
            organizer_id: organizer.id.clone(),
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();

        (ctx, mailer, event)
    }

    #[tokio::test]
    async fn rejects_event_and_notifies_with_default_reason() {
        let (ctx, mailer, event) = setup().await;

        let usecase = RejectEventUseCase {
            event_id: event.id.clone(),
            reason: None,
        };
        let rejection = execute(usecase, &ctx).await.unwrap();
        assert_eq!(rejection.event.status, EventStatus::Rejected);

        tokio::time::sleep(Duration::from_millis(50)).await;
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email_type, EmailType::EventRejected);
        assert_eq!(sent[0].context["reason"], "No reason provided");
    }

    #[tokio::test]
    async fn passes_the_rejection_reason_along() {
        let (ctx, mailer, event) = setup().await;

        let usecase = RejectEventUseCase {
            event_id: event.id.clone(),
            reason: Some("Venue not confirmed".into()),
        };
        execute(usecase, &ctx).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].context["reason"], "Venue not confirmed");
    }
}
