mod execute_reminder;
mod scheduler;

pub use scheduler::ReminderScheduler;
