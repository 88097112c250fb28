use async_trait::async_trait;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::shared::patch::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignUserRoleError {
    #[error("User not found")]
    UserNotFound,

    #[error("Role not found")]
    RoleNotFound,

    #[error("User already holds this role")]
    AlreadyAssigned,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<StoreError> for AssignUserRoleError {
    fn from(e: StoreError) -> Self {
        AssignUserRoleError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait AssignUserRoleUseCase: Send + Sync {
    async fn execute(&self, pair: UserRole) -> Result<UserRole, AssignUserRoleError>;
}
