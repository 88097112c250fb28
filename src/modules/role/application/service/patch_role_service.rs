use async_trait::async_trait;
use tracing::info;

use crate::modules::role::application::domain::entities::{Role, RolePatch};
use crate::modules::role::application::ports::incoming::use_cases::PatchRoleUseCase;
use crate::modules::role::application::ports::outgoing::RoleRepository;
use crate::shared::patch::{guarded_patch, GuardError, PatchOutcome};

pub struct PatchRoleService<R>
where
    R: RoleRepository,
{
    repository: R,
}

impl<R> PatchRoleService<R>
where
    R: RoleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchRoleUseCase for PatchRoleService<R>
where
    R: RoleRepository,
{
    async fn execute(&self, id: i32, patch: RolePatch) -> Result<PatchOutcome<Role>, GuardError> {
        let outcome = guarded_patch(&self.repository, id, patch).await?;

        if outcome.affected_rows > 0 {
            info!("Patched role {}: {}", id, outcome.updated_fields.join(", "));
        }
        Ok(outcome)
    }
}
