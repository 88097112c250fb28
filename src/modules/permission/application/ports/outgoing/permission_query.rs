use async_trait::async_trait;

use crate::modules::permission::application::domain::entities::{Permission, RolePermission};
use crate::shared::patch::StoreError;

#[async_trait]
pub trait PermissionQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Permission>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Permission>, StoreError>;

    async fn list_role_permissions(&self) -> Result<Vec<RolePermission>, StoreError>;
}
