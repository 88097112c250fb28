use async_trait::async_trait;

use crate::modules::role::application::domain::entities::Role;
use crate::shared::patch::GuardError;

#[async_trait]
pub trait GetRolesUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Role, GuardError>;

    async fn list(&self) -> Result<Vec<Role>, GuardError>;
}
