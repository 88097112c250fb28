use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, UserFilter};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::StoreError;

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, StoreError>;

    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<User>, StoreError>;

    async fn search(&self, filter: UserFilter) -> Result<Vec<User>, StoreError>;

    /// Users that hold no role at all.
    async fn list_without_role(&self, page: PageRequest) -> Result<PageResult<User>, StoreError>;
}
