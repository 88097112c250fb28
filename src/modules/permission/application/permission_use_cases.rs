use std::sync::Arc;

use crate::modules::permission::application::ports::incoming::use_cases::{
    CreatePermissionUseCase, DeletePermissionUseCase, GetPermissionsUseCase,
};

#[derive(Clone)]
pub struct PermissionUseCases {
    pub create: Arc<dyn CreatePermissionUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePermissionUseCase + Send + Sync>,
    pub get: Arc<dyn GetPermissionsUseCase + Send + Sync>,
}
