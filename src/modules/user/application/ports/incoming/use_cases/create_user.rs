use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{NewUser, User};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, input: NewUser) -> Result<User, GuardError>;
}
