use async_trait::async_trait;

use crate::modules::role::application::domain::entities::Role;
use crate::modules::role::application::ports::incoming::use_cases::GetRolesUseCase;
use crate::modules::role::application::ports::outgoing::RoleQuery;
use crate::shared::patch::GuardError;

#[derive(Debug, Clone)]
pub struct GetRolesService<Q>
where
    Q: RoleQuery,
{
    query: Q,
}

impl<Q> GetRolesService<Q>
where
    Q: RoleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRolesUseCase for GetRolesService<Q>
where
    Q: RoleQuery,
{
    async fn get(&self, id: i32) -> Result<Role, GuardError> {
        self.query.find_by_id(id).await?.ok_or(GuardError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Role>, GuardError> {
        Ok(self.query.list_all().await?)
    }
}
