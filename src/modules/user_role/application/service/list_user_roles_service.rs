use async_trait::async_trait;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::modules::user_role::application::ports::incoming::use_cases::ListUserRolesUseCase;
use crate::modules::user_role::application::ports::outgoing::UserRoleQuery;
use crate::shared::patch::GuardError;

#[derive(Debug, Clone)]
pub struct ListUserRolesService<Q>
where
    Q: UserRoleQuery,
{
    query: Q,
}

impl<Q> ListUserRolesService<Q>
where
    Q: UserRoleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUserRolesUseCase for ListUserRolesService<Q>
where
    Q: UserRoleQuery,
{
    async fn execute(&self) -> Result<Vec<UserRole>, GuardError> {
        Ok(self.query.list_all().await?)
    }
}
