use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::modules::user_role::application::ports::incoming::use_cases::{
    AssignUserRoleError, AssignUserRoleUseCase,
};
use crate::modules::user_role::application::ports::outgoing::UserRoleRepository;

pub struct AssignUserRoleService<R>
where
    R: UserRoleRepository,
{
    repository: R,
}

impl<R> AssignUserRoleService<R>
where
    R: UserRoleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AssignUserRoleUseCase for AssignUserRoleService<R>
where
    R: UserRoleRepository,
{
    async fn execute(&self, pair: UserRole) -> Result<UserRole, AssignUserRoleError> {
        let user_ids = [pair.user_id];
        let role_ids = [pair.role_id];

        if self.repository.existing_user_ids(&user_ids).await?.is_empty() {
            return Err(AssignUserRoleError::UserNotFound);
        }
        if self.repository.existing_role_ids(&role_ids).await?.is_empty() {
            return Err(AssignUserRoleError::RoleNotFound);
        }

        let existing = self.repository.existing_pairs(&user_ids, &role_ids).await?;
        if existing.contains(&pair) {
            warn!("User {} already holds role {}", pair.user_id, pair.role_id);
            return Err(AssignUserRoleError::AlreadyAssigned);
        }

        self.repository.insert_pairs(&[pair]).await?;
        info!("Assigned role {} to user {}", pair.role_id, pair.user_id);
        Ok(pair)
    }
}
