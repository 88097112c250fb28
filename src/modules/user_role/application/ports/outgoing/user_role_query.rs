use async_trait::async_trait;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::shared::patch::StoreError;

#[async_trait]
pub trait UserRoleQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<UserRole>, StoreError>;
}
