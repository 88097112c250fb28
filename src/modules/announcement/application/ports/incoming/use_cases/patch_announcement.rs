use async_trait::async_trait;

use crate::modules::announcement::application::domain::entities::{
    Announcement, AnnouncementPatch,
};
use crate::shared::patch::{GuardError, PatchOutcome};

#[async_trait]
pub trait PatchAnnouncementUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        patch: AnnouncementPatch,
    ) -> Result<PatchOutcome<Announcement>, GuardError>;
}
