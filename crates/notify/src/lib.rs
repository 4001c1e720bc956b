mod event;
mod reminder;
mod shared;

pub use event::{ApproveEventUseCase, EventRejection, RejectEventUseCase, SubmitHighlightUseCase};
pub use reminder::ReminderScheduler;
pub use shared::usecase::{execute, Subscriber, UseCase};
