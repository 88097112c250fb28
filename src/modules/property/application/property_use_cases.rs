use std::sync::Arc;

use crate::modules::property::application::ports::incoming::use_cases::{
    ArchivePropertyUseCase, BatchCreatePropertiesUseCase, CreatePropertyUseCase,
    GetPropertiesUseCase, PatchPropertyUseCase,
};

#[derive(Clone)]
pub struct PropertyUseCases {
    pub create: Arc<dyn CreatePropertyUseCase + Send + Sync>,
    pub batch_create: Arc<dyn BatchCreatePropertiesUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchPropertyUseCase + Send + Sync>,
    pub get: Arc<dyn GetPropertiesUseCase + Send + Sync>,
    pub archive: Arc<dyn ArchivePropertyUseCase + Send + Sync>,
}
