use async_trait::async_trait;

use crate::modules::announcement::application::domain::entities::Announcement;
use crate::modules::announcement::application::ports::incoming::use_cases::GetAnnouncementsUseCase;
use crate::modules::announcement::application::ports::outgoing::AnnouncementQuery;
use crate::shared::patch::GuardError;

pub struct GetAnnouncementsService<Q>
where
    Q: AnnouncementQuery,
{
    query: Q,
}

impl<Q> GetAnnouncementsService<Q>
where
    Q: AnnouncementQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAnnouncementsUseCase for GetAnnouncementsService<Q>
where
    Q: AnnouncementQuery,
{
    async fn get(&self, id: i32) -> Result<Announcement, GuardError> {
        self.query.find_by_id(id).await?.ok_or(GuardError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Announcement>, GuardError> {
        Ok(self.query.list_all().await?)
    }

    async fn list_deleted(&self) -> Result<Vec<Announcement>, GuardError> {
        Ok(self.query.list_deleted().await?)
    }
}
