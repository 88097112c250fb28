use async_trait::async_trait;

use crate::shared::patch::GuardError;

#[async_trait]
pub trait ArchiveAnnouncementUseCase: Send + Sync {
    async fn delete(&self, id: i32) -> Result<(), GuardError>;
    async fn restore(&self, id: i32) -> Result<(), GuardError>;
    async fn hard_delete(&self, id: i32) -> Result<(), GuardError>;
}
