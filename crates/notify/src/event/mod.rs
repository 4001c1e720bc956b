mod approve_event;
mod reject_event;
mod submit_highlight;
mod subscribers;

pub use approve_event::ApproveEventUseCase;
pub use reject_event::{EventRejection, RejectEventUseCase};
pub use submit_highlight::SubmitHighlightUseCase;
