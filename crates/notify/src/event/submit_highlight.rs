use crate::shared::usecase::UseCase;
use festivo_domain::{EventHighlight, HighlightItem, ID};
use festivo_infra::FestivoContext;

/// Stores the organizer's post-event highlight. The reminder pipeline
/// is not told about it: the next reminder to fire sees the highlight
/// and stops the escalation on its own, so it can take up to one
/// follow-up interval before the nagging actually stops.
#[derive(Debug)]
pub struct SubmitHighlightUseCase {
    pub event_id: ID,
    pub attendance: i64,
    pub ticket_sales: i64,
    pub highlights: Vec<HighlightItem>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadyExists(ID),
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for SubmitHighlightUseCase {
    type Response = EventHighlight;

    type Error = UseCaseError;

    const NAME: &'static str = "SubmitHighlight";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.events.find(&self.event_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.event_id.clone()));
        }

        if ctx
            .repos
            .event_highlights
            .find_by_event(&self.event_id)
            .await
            .is_some()
        {
            return Err(UseCaseError::AlreadyExists(self.event_id.clone()));
        }

        let highlight = EventHighlight {
            event_id: self.event_id.clone(),
            attendance: self.attendance,
            ticket_sales: self.ticket_sales,
            highlights: self.highlights.clone(),
            created: ctx.sys.get_timestamp_millis(),
        };

        ctx.repos
            .event_highlights
            .insert(&highlight)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(highlight)
    }
}
