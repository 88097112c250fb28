use async_trait::async_trait;

use crate::modules::user::application::domain::entities::User;
use crate::shared::patch::GuardError;

#[async_trait]
pub trait SetUserStatusUseCase: Send + Sync {
    async fn execute(&self, id: i32, status: bool) -> Result<User, GuardError>;
}
