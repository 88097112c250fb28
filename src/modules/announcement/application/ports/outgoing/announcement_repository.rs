use async_trait::async_trait;

use crate::modules::announcement::application::domain::entities::{
    Announcement, AnnouncementDraft, AnnouncementPatch,
};
use crate::shared::patch::{PatchStore, StoreError};

#[async_trait]
pub trait AnnouncementRepository: PatchStore<AnnouncementPatch, Row = Announcement> {
    async fn create_announcement(&self, draft: AnnouncementDraft)
        -> Result<Announcement, StoreError>;

    /// `false` when no live row matched.
    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError>;

    /// `false` when no deleted row matched.
    async fn restore(&self, id: i32) -> Result<bool, StoreError>;

    /// Removes the row whether or not it was soft-deleted.
    async fn hard_delete(&self, id: i32) -> Result<bool, StoreError>;
}
