use async_trait::async_trait;
use tracing::info;

use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::incoming::use_cases::SetUserStatusUseCase;
use crate::modules::user::application::ports::outgoing::UserRepository;
use crate::shared::patch::GuardError;

pub struct SetUserStatusService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> SetUserStatusService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetUserStatusUseCase for SetUserStatusService<R>
where
    R: UserRepository,
{
    async fn execute(&self, id: i32, status: bool) -> Result<User, GuardError> {
        let user = self
            .repository
            .set_status(id, status)
            .await?
            .ok_or(GuardError::NotFound)?;

        info!("User {} status set to {}", id, status);
        Ok(user)
    }
}
