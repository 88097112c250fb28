use async_trait::async_trait;

use crate::modules::announcement::application::domain::entities::Announcement;
use crate::shared::patch::StoreError;

#[async_trait]
pub trait AnnouncementQuery: Send + Sync {
    /// Live rows only.
    async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, StoreError>;

    /// Live rows, newest `publish_time` first; unpublished rows lead.
    async fn list_all(&self) -> Result<Vec<Announcement>, StoreError>;

    async fn list_deleted(&self) -> Result<Vec<Announcement>, StoreError>;
}
