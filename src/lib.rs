//! Festivo's event notification subsystem: once an event is approved,
//! its organizer is reminded by email to submit a post-event highlight
//! until one shows up or the reminders run out.
//!
//! The host application embeds this by creating a
//! [`FestivoContext`](infra::FestivoContext), one
//! [`ReminderScheduler`](notify::ReminderScheduler) and running the
//! event lifecycle use cases through [`notify::execute`].

mod telemetry;

pub use festivo_domain as domain;
pub use festivo_infra as infra;
pub use festivo_notify as notify;
pub use telemetry::{get_subscriber, init_subscriber};
