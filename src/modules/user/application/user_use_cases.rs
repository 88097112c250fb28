use std::sync::Arc;

use crate::modules::user::application::ports::incoming::use_cases::{
    BatchCreateUsersUseCase, CreateUserUseCase, GetUsersUseCase, PatchUserUseCase,
    SetUserStatusUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub batch_create: Arc<dyn BatchCreateUsersUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchUserUseCase + Send + Sync>,
    pub set_status: Arc<dyn SetUserStatusUseCase + Send + Sync>,
    pub get: Arc<dyn GetUsersUseCase + Send + Sync>,
}
