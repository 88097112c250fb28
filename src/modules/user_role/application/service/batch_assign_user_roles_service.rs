use async_trait::async_trait;
use tracing::info;

use crate::modules::user_role::application::domain::entities::{
    dedup_ids, BatchAssignReport, UserRole,
};
use crate::modules::user_role::application::ports::incoming::use_cases::BatchAssignUserRolesUseCase;
use crate::modules::user_role::application::ports::outgoing::UserRoleRepository;
use crate::shared::patch::GuardError;

pub struct BatchAssignUserRolesService<R>
where
    R: UserRoleRepository,
{
    repository: R,
}

impl<R> BatchAssignUserRolesService<R>
where
    R: UserRoleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> BatchAssignUserRolesUseCase for BatchAssignUserRolesService<R>
where
    R: UserRoleRepository,
{
    async fn execute(
        &self,
        user_ids: Vec<i32>,
        role_ids: Vec<i32>,
    ) -> Result<BatchAssignReport, GuardError> {
        let user_ids = dedup_ids(user_ids);
        let role_ids = dedup_ids(role_ids);

        let known_users = self.repository.existing_user_ids(&user_ids).await?;
        let known_roles = self.repository.existing_role_ids(&role_ids).await?;
        let user_ids: Vec<i32> = user_ids
            .into_iter()
            .filter(|id| known_users.contains(id))
            .collect();
        let role_ids: Vec<i32> = role_ids
            .into_iter()
            .filter(|id| known_roles.contains(id))
            .collect();

        if user_ids.is_empty() || role_ids.is_empty() {
            return Ok(BatchAssignReport::default());
        }

        let existing = self.repository.existing_pairs(&user_ids, &role_ids).await?;
        let pairs: Vec<UserRole> = user_ids
            .iter()
            .flat_map(|&user_id| role_ids.iter().map(move |&role_id| UserRole { user_id, role_id }))
            .filter(|pair| !existing.contains(pair))
            .collect();

        if pairs.is_empty() {
            return Ok(BatchAssignReport::default());
        }

        let created = self.repository.insert_pairs(&pairs).await?;
        info!(
            "Batch assigned {} user-role pair(s), {} already held",
            created,
            existing.len()
        );
        Ok(BatchAssignReport { created })
    }
}
