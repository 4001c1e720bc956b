use super::approve_event::ApproveEventUseCase;
use super::reject_event::{EventRejection, RejectEventUseCase};
use crate::reminder::ReminderScheduler;
use crate::shared::usecase::Subscriber;
use festivo_domain::Event;
use festivo_infra::{EmailNotification, EmailType, FestivoContext};
use std::sync::Arc;
use tracing::warn;

/// The one call site that starts the post-event reminder lifecycle.
pub struct StartRemindersOnEventApproved {
    pub scheduler: Arc<ReminderScheduler>,
}

#[async_trait::async_trait]
impl Subscriber<ApproveEventUseCase> for StartRemindersOnEventApproved {
    async fn notify(&self, e: &Event, ctx: &FestivoContext) {
        self.scheduler
            .start_reminder_process(e.id.clone(), e.event_date, ctx);
    }
}

pub struct SendApprovalEmailOnEventApproved;

#[async_trait::async_trait]
impl Subscriber<ApproveEventUseCase> for SendApprovalEmailOnEventApproved {
    async fn notify(&self, e: &Event, ctx: &FestivoContext) {
        let organizer = ctx.repos.organizers.find(&e.organizer_id).await;
        let email = match organizer.and_then(|o| o.email) {
            Some(email) => email,
            None => {
                warn!("Organizer email not found for event {}", e.id);
                return;
            }
        };
        ctx.notifier.dispatch(EmailNotification {
            to: email,
            email_type: EmailType::EventApproved,
            context: serde_json::json!({
                "eventTitle": e.title,
                "eventDate": e.event_date,
            }),
        });
    }
}

pub struct SendRejectionEmailOnEventRejected;

#[async_trait::async_trait]
impl Subscriber<RejectEventUseCase> for SendRejectionEmailOnEventRejected {
    async fn notify(&self, e: &EventRejection, ctx: &FestivoContext) {
        let organizer = ctx.repos.organizers.find(&e.event.organizer_id).await;
        let email = match organizer.and_then(|o| o.email) {
            Some(email) => email,
            None => {
                warn!("Organizer email not found for event {}", e.event.id);
                return;
            }
        };
        let reason = e
            .reason
            .clone()
            .unwrap_or_else(|| "No reason provided".into());
        ctx.notifier.dispatch(EmailNotification {
            to: email,
            email_type: EmailType::EventRejected,
            context: serde_json::json!({
                "eventTitle": e.event.title,
                "eventDate": e.event.event_date,
                "reason": reason,
            }),
        });
    }
}
