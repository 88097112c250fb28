use async_trait::async_trait;

use crate::modules::role::application::domain::entities::{NewRole, Role};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait CreateRoleUseCase: Send + Sync {
    async fn execute(&self, input: NewRole) -> Result<Role, GuardError>;
}
