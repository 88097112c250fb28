use async_trait::async_trait;

use crate::modules::permission::application::domain::entities::{Permission, RolePermission};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait GetPermissionsUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Permission, GuardError>;

    async fn list(&self) -> Result<Vec<Permission>, GuardError>;

    async fn list_role_permissions(&self) -> Result<Vec<RolePermission>, GuardError>;
}
