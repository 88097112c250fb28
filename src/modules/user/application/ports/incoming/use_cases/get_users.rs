use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, UserFilter};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<User, GuardError>;

    async fn list(&self) -> Result<Vec<User>, GuardError>;

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<User>, GuardError>;

    async fn search(&self, filter: UserFilter) -> Result<Vec<User>, GuardError>;

    async fn list_without_role(&self, page: PageRequest) -> Result<PageResult<User>, GuardError>;
}
