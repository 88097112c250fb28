use async_trait::async_trait;

use crate::modules::role::application::domain::entities::Role;
use crate::shared::patch::StoreError;

#[async_trait]
pub trait RoleQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Role>, StoreError>;
}
