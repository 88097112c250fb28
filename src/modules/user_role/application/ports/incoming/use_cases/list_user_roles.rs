use async_trait::async_trait;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::shared::patch::GuardError;

#[async_trait]
pub trait ListUserRolesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserRole>, GuardError>;
}
