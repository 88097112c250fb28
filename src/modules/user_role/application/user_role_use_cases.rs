use std::sync::Arc;

use crate::modules::user_role::application::ports::incoming::use_cases::{
    AssignUserRoleUseCase, BatchAssignUserRolesUseCase, ListUserRolesUseCase,
    ReplaceUserRolesUseCase,
};

#[derive(Clone)]
pub struct UserRoleUseCases {
    pub list: Arc<dyn ListUserRolesUseCase + Send + Sync>,
    pub assign: Arc<dyn AssignUserRoleUseCase + Send + Sync>,
    pub batch_assign: Arc<dyn BatchAssignUserRolesUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplaceUserRolesUseCase + Send + Sync>,
}
