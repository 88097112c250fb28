use std::sync::Arc;

use crate::modules::announcement::application::ports::incoming::use_cases::{
    ArchiveAnnouncementUseCase, CreateAnnouncementUseCase, GetAnnouncementsUseCase,
    PatchAnnouncementUseCase,
};

#[derive(Clone)]
pub struct AnnouncementUseCases {
    pub create: Arc<dyn CreateAnnouncementUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchAnnouncementUseCase + Send + Sync>,
    pub get: Arc<dyn GetAnnouncementsUseCase + Send + Sync>,
    pub archive: Arc<dyn ArchiveAnnouncementUseCase + Send + Sync>,
}
