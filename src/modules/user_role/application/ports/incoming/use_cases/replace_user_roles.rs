use async_trait::async_trait;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::shared::patch::GuardError;

#[async_trait]
pub trait ReplaceUserRolesUseCase: Send + Sync {
    async fn execute(&self, user_id: i32, role_ids: Vec<i32>) -> Result<Vec<UserRole>, GuardError>;
}
