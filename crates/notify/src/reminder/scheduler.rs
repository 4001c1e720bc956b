use super::execute_reminder::ExecuteReminderUseCase;
use crate::shared::usecase::execute;
use festivo_domain::{PostEventReminder, ID};
use festivo_infra::FestivoContext;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// One armed reminder attempt. The `JoinHandle` of the sleeping task is
/// owned exclusively by the scheduler and only ever used to abort it.
#[derive(Debug)]
struct ScheduledReminder {
    reminder: PostEventReminder,
    handle: JoinHandle<()>,
}

/// Drives the post-event reminder escalation: after an event took
/// place, its organizer is nagged for an `EventHighlight` until one is
/// submitted or the attempt budget runs out.
///
/// The table of in-flight reminders is owned by this struct alone and
/// lives in memory only: a process restart loses all pending reminders.
#[derive(Debug)]
pub struct ReminderScheduler {
    active_reminders: Mutex<HashMap<(ID, u32), ScheduledReminder>>,
}

impl ReminderScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            active_reminders: Mutex::new(HashMap::new()),
        })
    }

    /// Begin the reminder lifecycle for an event. The first attempt is
    /// due a configured number of days after the event date; an event
    /// whose first attempt is already in the past is never reminded.
    ///
    /// Expected to be called at most once per event, on approval.
    pub fn start_reminder_process(
        self: &Arc<Self>,
        event_id: ID,
        event_date: i64,
        ctx: &FestivoContext,
    ) {
        let scheduled_for =
            event_date + ctx.config.post_event_reminder_initial_delay_days * MILLIS_PER_DAY;

        if scheduled_for <= ctx.sys.get_timestamp_millis() {
            warn!(
                "Cannot schedule past-due reminder for event {}. Event date: {}",
                event_id, event_date
            );
            return;
        }

        self.arm_reminder(event_id.clone(), 1, scheduled_for, ctx);
        info!(
            "Started post-event reminder process for event {}, first attempt due at {}",
            event_id, scheduled_for
        );
    }

    /// Arm one attempt, superseding any reminder already armed for the
    /// same (event, attempt) pair. An attempt that is already due is
    /// executed right away instead of being armed.
    pub(crate) fn arm_reminder(
        self: &Arc<Self>,
        event_id: ID,
        attempt: u32,
        scheduled_for: i64,
        ctx: &FestivoContext,
    ) {
        self.cancel_reminder(&event_id, attempt);

        let usecase = ExecuteReminderUseCase {
            event_id: event_id.clone(),
            attempt,
            scheduler: self.clone(),
        };
        let task_ctx = ctx.clone();

        let delay_millis = scheduled_for - ctx.sys.get_timestamp_millis();
        if delay_millis <= 0 {
            info!(
                "Reminder for event {} (attempt {}) is already due, executing now",
                event_id, attempt
            );
            tokio::spawn(async move {
                let _ = execute(usecase, &task_ctx).await;
            });
            return;
        }

        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_millis as u64)).await;
            let _ = execute(usecase, &task_ctx).await;
        });

        let reminder = PostEventReminder {
            event_id: event_id.clone(),
            attempt,
            scheduled_for,
        };
        self.active_reminders
            .lock()
            .unwrap()
            .insert((event_id.clone(), attempt), ScheduledReminder { reminder, handle });

        info!(
            "Scheduled post-event reminder for event {} (attempt {}) at {}",
            event_id, attempt, scheduled_for
        );
    }

    /// Cancel a single armed attempt. Doing nothing when the pair is
    /// not armed makes cancellation idempotent, which is what resolves
    /// a cancel racing an in-flight firing.
    pub fn cancel_reminder(&self, event_id: &ID, attempt: u32) {
        let removed = self
            .active_reminders
            .lock()
            .unwrap()
            .remove(&(event_id.clone(), attempt));
        if let Some(entry) = removed {
            entry.handle.abort();
            info!(
                "Cancelled post-event reminder for event {} (attempt {})",
                event_id, attempt
            );
        }
    }

    /// Cancel every armed attempt for an event, whatever its number.
    pub fn cancel_all_reminders(&self, event_id: &ID) {
        let mut table = self.active_reminders.lock().unwrap();
        let keys = table
            .keys()
            .filter(|(id, _)| id == event_id)
            .cloned()
            .collect::<Vec<_>>();
        for key in keys {
            if let Some(entry) = table.remove(&key) {
                entry.handle.abort();
            }
        }
        drop(table);
        info!("Cancelled all reminders for event {}", event_id);
    }

    /// Snapshot of all currently armed reminders, for monitoring. The
    /// internal table is never handed out.
    pub fn list_active_reminders(&self) -> Vec<PostEventReminder> {
        self.active_reminders
            .lock()
            .unwrap()
            .values()
            .map(|entry| entry.reminder.clone())
            .collect()
    }

    /// Forget an attempt that is firing right now. Leaves the task
    /// handle alone: the task calling this is the one being removed.
    pub(crate) fn remove_fired(&self, event_id: &ID, attempt: u32) {
        self.active_reminders
            .lock()
            .unwrap()
            .remove(&(event_id.clone(), attempt));
    }
}
