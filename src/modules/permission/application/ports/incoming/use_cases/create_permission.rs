use async_trait::async_trait;

use crate::modules::permission::application::domain::entities::{NewPermission, Permission};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait CreatePermissionUseCase: Send + Sync {
    async fn execute(&self, input: NewPermission) -> Result<Permission, GuardError>;
}
