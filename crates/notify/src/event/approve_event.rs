use super::subscribers::{SendApprovalEmailOnEventApproved, StartRemindersOnEventApproved};
use crate::reminder::ReminderScheduler;
use crate::shared::usecase::{Subscriber, UseCase};
use festivo_domain::{Event, EventStatus, ID};
use festivo_infra::FestivoContext;
use std::sync::Arc;

/// Marks a pending event as approved. Side effects: the organizer is
/// notified and the post-event reminder process is started for the
/// event. This is the only place that starts it.
#[derive(Debug)]
pub struct ApproveEventUseCase {
    pub event_id: ID,
    pub scheduler: Arc<ReminderScheduler>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for ApproveEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "ApproveEvent";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let mut event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        event.status = EventStatus::Approved;
        event.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .events
            .save(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }

    fn subscribers(&self) -> Vec<Box<dyn Subscriber<Self>>> {
        vec![
            Box::new(SendApprovalEmailOnEventApproved),
            Box::new(StartRemindersOnEventApproved {
                scheduler: self.scheduler.clone(),
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use festivo_domain::Organizer;
    use festivo_infra::{Config, EmailType, FestivoContext, ISys, InMemoryMailer};
    use std::time::Duration;

    const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

    struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1613862000000 // Sun Feb 21 2021 00:00:00 GMT+0100 (Central European Standard Time)
        }
    }

    struct TestContext {
        ctx: FestivoContext,
        scheduler: Arc<ReminderScheduler>,
        mailer: Arc<InMemoryMailer>,
        event: Event,
    }

    async fn setup() -> TestContext {
        let mailer = Arc::new(InMemoryMailer::new());
        let mut ctx = FestivoContext::create(Config::new(), mailer.clone());
        ctx.sys = Arc::new(StaticTimeSys {});

        let organizer = Organizer {
            id: Default::default(),
            full_name: "Ada Lovelace".into(),
            email: Some("ada@example.com".into()),
        };
        ctx.repos.organizers.insert(&organizer).await.unwrap();

        let event = Event {
            id: Default::default(),
            title: "RustFest".into(),
            event_date: ctx.sys.get_timestamp_millis() + MILLIS_PER_DAY,
            status: EventStatus::Pending,
            organizer_id: organizer.id.clone(),
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();

        TestContext {
            ctx,
            scheduler: ReminderScheduler::new(),
            mailer,
            event,
        }
    }

    #[tokio::test]
    async fn approves_event_and_starts_reminder_process() {
        let t = setup().await;

        let usecase = ApproveEventUseCase {
            event_id: t.event.id.clone(),
            scheduler: t.scheduler.clone(),
        };
        let approved = execute(usecase, &t.ctx).await.unwrap();
        assert_eq!(approved.status, EventStatus::Approved);

        let stored = t.ctx.repos.events.find(&t.event.id).await.unwrap();
        assert_eq!(stored.status, EventStatus::Approved);

        let active = t.scheduler.list_active_reminders();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].event_id, t.event.id);
        assert_eq!(active[0].attempt, 1);

        tokio::time::sleep(Duration::from_millis(50)).await;
        let sent = t.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email_type, EmailType::EventApproved);
        assert_eq!(sent[0].to, "ada@example.com");
    }

    #[tokio::test]
    async fn rejects_unknown_event_id() {
        let t = setup().await;

        let event_id = ID::default();
        let usecase = ApproveEventUseCase {
            event_id: event_id.clone(),
            scheduler: t.scheduler.clone(),
        };
        let res = execute(usecase, &t.ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(event_id));
        assert!(t.scheduler.list_active_reminders().is_empty());
    }
}
