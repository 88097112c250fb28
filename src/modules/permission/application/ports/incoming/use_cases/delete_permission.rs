use async_trait::async_trait;

use crate::shared::patch::GuardError;

#[async_trait]
pub trait DeletePermissionUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), GuardError>;
}
