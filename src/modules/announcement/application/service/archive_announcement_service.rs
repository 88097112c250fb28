use async_trait::async_trait;
use tracing::info;

use crate::modules::announcement::application::ports::incoming::use_cases::ArchiveAnnouncementUseCase;
use crate::modules::announcement::application::ports::outgoing::AnnouncementRepository;
use crate::shared::patch::GuardError;

pub struct ArchiveAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    repository: R,
}

impl<R> ArchiveAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ArchiveAnnouncementUseCase for ArchiveAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    async fn delete(&self, id: i32) -> Result<(), GuardError> {
        if !self.repository.soft_delete(id).await? {
            return Err(GuardError::NotFound);
        }
        info!("Soft-deleted announcement {}", id);
        Ok(())
    }

    async fn restore(&self, id: i32) -> Result<(), GuardError> {
        if !self.repository.restore(id).await? {
            return Err(GuardError::NotFound);
        }
        info!("Restored announcement {}", id);
        Ok(())
    }

    async fn hard_delete(&self, id: i32) -> Result<(), GuardError> {
        if !self.repository.hard_delete(id).await? {
            return Err(GuardError::NotFound);
        }
        info!("Deleted announcement {}", id);
        Ok(())
    }
}
