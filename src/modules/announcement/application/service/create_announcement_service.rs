use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::announcement::application::domain::entities::{
    Announcement, NewAnnouncement,
};
use crate::modules::announcement::application::ports::incoming::use_cases::CreateAnnouncementUseCase;
use crate::modules::announcement::application::ports::outgoing::AnnouncementRepository;
use crate::shared::patch::GuardError;

pub struct CreateAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    repository: R,
}

impl<R> CreateAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateAnnouncementUseCase for CreateAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    async fn execute(&self, input: NewAnnouncement) -> Result<Announcement, GuardError> {
        let draft = input.prepare(Utc::now()).map_err(GuardError::Validation)?;

        let announcement = self.repository.create_announcement(draft).await?;
        info!(
            "Created announcement {} ({:?})",
            announcement.id, announcement.status
        );
        Ok(announcement)
    }
}
