use async_trait::async_trait;

use crate::modules::announcement::application::domain::entities::{
    Announcement, NewAnnouncement,
};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait CreateAnnouncementUseCase: Send + Sync {
    async fn execute(&self, input: NewAnnouncement) -> Result<Announcement, GuardError>;
}
