use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, UserPatch};
use crate::shared::patch::{GuardError, PatchOutcome};

#[async_trait]
pub trait PatchUserUseCase: Send + Sync {
    async fn execute(&self, id: i32, patch: UserPatch) -> Result<PatchOutcome<User>, GuardError>;
}
