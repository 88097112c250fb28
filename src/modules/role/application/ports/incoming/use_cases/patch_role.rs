use async_trait::async_trait;

use crate::modules::role::application::domain::entities::{Role, RolePatch};
use crate::shared::patch::{GuardError, PatchOutcome};

#[async_trait]
pub trait PatchRoleUseCase: Send + Sync {
    async fn execute(&self, id: i32, patch: RolePatch) -> Result<PatchOutcome<Role>, GuardError>;
}
