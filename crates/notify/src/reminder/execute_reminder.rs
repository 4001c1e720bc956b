use super::scheduler::ReminderScheduler;
use crate::shared::usecase::UseCase;
use festivo_domain::ID;
use festivo_infra::{EmailNotification, EmailType, FestivoContext};
use std::sync::Arc;
use tracing::{info, warn};

/// The decision procedure run each time a post-event reminder fires:
/// look at the current state of the event and decide whether to nag the
/// organizer again, hand over to the next attempt, or stop.
///
/// Only ever constructed by the `ReminderScheduler`.
#[derive(Debug)]
pub struct ExecuteReminderUseCase {
    pub event_id: ID,
    pub attempt: u32,
    pub scheduler: Arc<ReminderScheduler>,
}

#[derive(Debug, PartialEq)]
pub enum ReminderOutcome {
    /// The event was deleted after this reminder was armed
    EventGone,
    /// A highlight exists, the escalation is done
    Completed,
    /// The organizer has no email address, nobody to nag
    Abandoned,
    /// Reminder sent and the next attempt armed
    Rescheduled { next_attempt: u32 },
    /// Reminder sent and the attempt budget is used up
    Exhausted,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait]
impl UseCase for ExecuteReminderUseCase {
    type Response = ReminderOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "ExecutePostEventReminder";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        // This attempt is no longer pending. Removing it before the
        // first await keeps a concurrent cancellation from racing the
        // firing path.
        self.scheduler.remove_fired(&self.event_id, self.attempt);

        info!(
            "Executing post-event reminder for event {} (attempt {})",
            self.event_id, self.attempt
        );

        let event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            None => {
                warn!(
                    "Event {} not found. Skipping post-event reminder.",
                    self.event_id
                );
                return Ok(ReminderOutcome::EventGone);
            }
        };

        if ctx
            .repos
            .event_highlights
            .find_by_event(&self.event_id)
            .await
            .is_some()
        {
            info!(
                "Event {} already has a highlight. Skipping reminder and cancelling future reminders.",
                self.event_id
            );
            self.scheduler.cancel_all_reminders(&self.event_id);
            return Ok(ReminderOutcome::Completed);
        }

        let organizer = ctx.repos.organizers.find(&event.organizer_id).await;
        let organizer_email = match organizer.and_then(|o| o.email) {
            Some(email) => email,
            None => {
                warn!(
                    "Organizer email not found for event {}, cannot send reminder.",
                    self.event_id
                );
                return Ok(ReminderOutcome::Abandoned);
            }
        };

        // Fire-and-forget: a failed delivery is logged by the delivery
        // task and does not stop the escalation.
        let max_attempts = ctx.config.post_event_reminder_max_follow_up_attempts;
        ctx.notifier.dispatch(EmailNotification {
            to: organizer_email,
            email_type: EmailType::PostEventReminder,
            context: serde_json::json!({
                "eventTitle": event.title,
                "eventDate": event.event_date,
                "attempt": self.attempt,
                "maxAttempts": max_attempts,
            }),
        });

        if self.attempt < max_attempts {
            let next_attempt = self.attempt + 1;
            let scheduled_for = ctx.sys.get_timestamp_millis()
                + ctx.config.post_event_reminder_follow_up_interval;
            self.scheduler
                .arm_reminder(self.event_id.clone(), next_attempt, scheduled_for, ctx);
            Ok(ReminderOutcome::Rescheduled { next_attempt })
        } else {
            info!(
                "Max follow-up attempts reached for event {}. No further reminders will be scheduled.",
                self.event_id
            );
            Ok(ReminderOutcome::Exhausted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use festivo_domain::{Event, EventHighlight, EventStatus, Organizer};
    use festivo_infra::{Config, FestivoContext, ISys, InMemoryMailer};
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
            event_date: ctx.sys.get_timestamp_millis() - 2 * MILLIS_PER_DAY,
            status: EventStatus::Approved,
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

    fn usecase_for(t: &TestContext, attempt: u32) -> ExecuteReminderUseCase {
        ExecuteReminderUseCase {
            event_id: t.event.id.clone(),
            attempt,
            scheduler: t.scheduler.clone(),
        }
    }

    #[tokio::test]
    async fn sends_reminder_and_arms_follow_up() {
        let t = setup().await;

        let outcome = execute(usecase_for(&t, 1), &t.ctx).await.unwrap();
        assert_eq!(outcome, ReminderOutcome::Rescheduled { next_attempt: 2 });

        let active = t.scheduler.list_active_reminders();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attempt, 2);
        assert_eq!(
            active[0].scheduled_for,
            t.ctx.sys.get_timestamp_millis()
                + t.ctx.config.post_event_reminder_follow_up_interval
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        let sent = t.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].email_type, EmailType::PostEventReminder);
        assert_eq!(sent[0].context["eventTitle"], "RustFest");
        assert_eq!(sent[0].context["attempt"], 1);
        assert_eq!(sent[0].context["maxAttempts"], 7);
    }

    #[tokio::test]
    async fn existing_highlight_stops_the_escalation() {
        let t = setup().await;
        let highlight = EventHighlight {
            event_id: t.event.id.clone(),
            attendance: 120,
            ticket_sales: 80,
            highlights: Vec::new(),
            created: t.ctx.sys.get_timestamp_millis(),
        };
        t.ctx.repos.event_highlights.insert(&highlight).await.unwrap();

        // A stray later attempt should be swept up as well
        t.scheduler.arm_reminder(
            t.event.id.clone(),
            2,
            t.ctx.sys.get_timestamp_millis() + MILLIS_PER_DAY,
            &t.ctx,
        );

        let outcome = execute(usecase_for(&t, 1), &t.ctx).await.unwrap();
        assert_eq!(outcome, ReminderOutcome::Completed);
        assert!(t.scheduler.list_active_reminders().is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(t.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn final_attempt_is_not_rearmed() {
        let t = setup().await;
        let max = t.ctx.config.post_event_reminder_max_follow_up_attempts;

        let outcome = execute(usecase_for(&t, max), &t.ctx).await.unwrap();
        assert_eq!(outcome, ReminderOutcome::Exhausted);
        assert!(t.scheduler.list_active_reminders().is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(t.mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn deleted_event_is_dropped() {
        let t = setup().await;
        let _ = t.ctx.repos.events.delete(&t.event.id).await;

        let outcome = execute(usecase_for(&t, 1), &t.ctx).await.unwrap();
        assert_eq!(outcome, ReminderOutcome::EventGone);
        assert!(t.scheduler.list_active_reminders().is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(t.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn organizer_without_email_abandons_the_escalation() {
        let t = setup().await;
        let organizer = Organizer {
            id: Default::default(),
            full_name: "Grace Hopper".into(),
            email: None,
        };
        t.ctx.repos.organizers.insert(&organizer).await.unwrap();
        let mut event = t.event.clone();
        event.organizer_id = organizer.id;
        t.ctx.repos.events.save(&event).await.unwrap();

        let outcome = execute(usecase_for(&t, 1), &t.ctx).await.unwrap();
        assert_eq!(outcome, ReminderOutcome::Abandoned);
        assert!(t.scheduler.list_active_reminders().is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(t.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn overdue_arm_executes_immediately() {
        let t = setup().await;

        t.scheduler.arm_reminder(
            t.event.id.clone(),
            1,
            t.ctx.sys.get_timestamp_millis() - 1000,
            &t.ctx,
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        let sent = t.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].context["attempt"], 1);

        // The catch-up execution behaves like a normal firing and armed
        // the follow-up
        let active = t.scheduler.list_active_reminders();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attempt, 2);
    }
}
