use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::user::application::domain::entities::{Gender, NewUser, User};
use crate::modules::user::application::ports::incoming::use_cases::CreateUserUseCase;
use crate::modules::user::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UserRepository,
};
use crate::shared::patch::{guard_create, GuardError};

pub struct CreateUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: R,
    hasher: H,
}

impl<R, H> CreateUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(repository: R, hasher: H) -> Self {
        Self { repository, hasher }
    }
}

pub(crate) fn hash_failed(e: HashError) -> GuardError {
    error!("Password hashing failed: {}", e);
    GuardError::Internal(e.to_string())
}

/// Builds the insert row for an input that already passed the guard.
pub(crate) fn to_create_data(input: NewUser, password_hash: String) -> Result<CreateUserData, GuardError> {
    let gender = Gender::parse(&input.gender)
        .ok_or_else(|| GuardError::Internal(format!("unchecked gender {}", input.gender)))?;

    Ok(CreateUserData {
        username: input.username,
        password_hash,
        email: input.email,
        phone: input.phone,
        real_name: input.real_name,
        id_card: input.id_card,
        gender,
        avatar_url: input.avatar_url,
    })
}

#[async_trait]
impl<R, H> CreateUserUseCase for CreateUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn execute(&self, input: NewUser) -> Result<User, GuardError> {
        let input = input.normalized();
        guard_create(&self.repository, &input, Vec::new()).await?;

        let password_hash = self
            .hasher
            .hash_password(&input.password)
            .await
            .map_err(hash_failed)?;

        let user = self
            .repository
            .create_user(to_create_data(input, password_hash)?)
            .await?;

        info!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }
}
