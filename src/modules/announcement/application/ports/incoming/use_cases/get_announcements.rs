use async_trait::async_trait;

use crate::modules::announcement::application::domain::entities::Announcement;
use crate::shared::patch::GuardError;

#[async_trait]
pub trait GetAnnouncementsUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Announcement, GuardError>;
    async fn list(&self) -> Result<Vec<Announcement>, GuardError>;
    async fn list_deleted(&self) -> Result<Vec<Announcement>, GuardError>;
}
