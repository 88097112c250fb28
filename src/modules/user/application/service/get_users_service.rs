use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, UserFilter};
use crate::modules::user::application::ports::incoming::use_cases::GetUsersUseCase;
use crate::modules::user::application::ports::outgoing::UserQuery;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::GuardError;

#[derive(Debug, Clone)]
pub struct GetUsersService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUsersUseCase for GetUsersService<Q>
where
    Q: UserQuery,
{
    async fn get(&self, id: i32) -> Result<User, GuardError> {
        self.query.find_by_id(id).await?.ok_or(GuardError::NotFound)
    }

    async fn list(&self) -> Result<Vec<User>, GuardError> {
        Ok(self.query.list_all().await?)
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<User>, GuardError> {
        Ok(self.query.list_paged(page.normalized()).await?)
    }

    async fn search(&self, filter: UserFilter) -> Result<Vec<User>, GuardError> {
        Ok(self.query.search(filter.normalized()).await?)
    }

    async fn list_without_role(&self, page: PageRequest) -> Result<PageResult<User>, GuardError> {
        Ok(self.query.list_without_role(page.normalized()).await?)
    }
}
