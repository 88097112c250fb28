use async_trait::async_trait;
use tracing::info;

use crate::modules::role::application::domain::entities::{NewRole, Role};
use crate::modules::role::application::ports::incoming::use_cases::CreateRoleUseCase;
use crate::modules::role::application::ports::outgoing::RoleRepository;
use crate::shared::patch::{guard_create, GuardError};

pub struct CreateRoleService<R>
where
    R: RoleRepository,
{
    repository: R,
}

impl<R> CreateRoleService<R>
where
    R: RoleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateRoleUseCase for CreateRoleService<R>
where
    R: RoleRepository,
{
    async fn execute(&self, input: NewRole) -> Result<Role, GuardError> {
        let input = input.normalized();
        guard_create(&self.repository, &input, Vec::new()).await?;

        let role = self.repository.create_role(input).await?;
        info!("Created role {} ({})", role.id, role.name);
        Ok(role)
    }
}
