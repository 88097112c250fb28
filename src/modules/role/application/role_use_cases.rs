use std::sync::Arc;

use crate::modules::role::application::ports::incoming::use_cases::{
    CreateRoleUseCase, GetRolesUseCase, PatchRoleUseCase,
};

#[derive(Clone)]
pub struct RoleUseCases {
    pub create: Arc<dyn CreateRoleUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchRoleUseCase + Send + Sync>,
    pub get: Arc<dyn GetRolesUseCase + Send + Sync>,
}
