use async_trait::async_trait;

use crate::modules::permission::application::domain::entities::{NewPermission, Permission};
use crate::shared::patch::{StoreError, UniqueLookup};

#[async_trait]
pub trait PermissionRepository: UniqueLookup {
    async fn create_permission(&self, data: NewPermission) -> Result<Permission, StoreError>;

    /// Hard delete; role links go with it. `false` when nothing was deleted.
    async fn delete_permission(&self, id: i32) -> Result<bool, StoreError>;
}
