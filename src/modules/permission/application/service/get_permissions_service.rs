use async_trait::async_trait;

use crate::modules::permission::application::domain::entities::{Permission, RolePermission};
use crate::modules::permission::application::ports::incoming::use_cases::GetPermissionsUseCase;
use crate::modules::permission::application::ports::outgoing::PermissionQuery;
use crate::shared::patch::GuardError;

#[derive(Debug, Clone)]
pub struct GetPermissionsService<Q>
where
    Q: PermissionQuery,
{
    query: Q,
}

impl<Q> GetPermissionsService<Q>
where
    Q: PermissionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPermissionsUseCase for GetPermissionsService<Q>
where
    Q: PermissionQuery,
{
    async fn get(&self, id: i32) -> Result<Permission, GuardError> {
        self.query.find_by_id(id).await?.ok_or(GuardError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Permission>, GuardError> {
        Ok(self.query.list_all().await?)
    }

    async fn list_role_permissions(&self) -> Result<Vec<RolePermission>, GuardError> {
        Ok(self.query.list_role_permissions().await?)
    }
}
