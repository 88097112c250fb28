use async_trait::async_trait;

use crate::modules::property::application::domain::entities::{Property, PropertyFilter};
use crate::modules::property::application::ports::incoming::use_cases::GetPropertiesUseCase;
use crate::modules::property::application::ports::outgoing::PropertyQuery;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::GuardError;

#[derive(Debug, Clone)]
pub struct GetPropertiesService<Q>
where
    Q: PropertyQuery,
{
    query: Q,
}

impl<Q> GetPropertiesService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPropertiesUseCase for GetPropertiesService<Q>
where
    Q: PropertyQuery,
{
    async fn get(&self, id: i32) -> Result<Property, GuardError> {
        self.query.find_by_id(id).await?.ok_or(GuardError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Property>, GuardError> {
        Ok(self.query.list_all().await?)
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Property>, GuardError> {
        Ok(self.query.list_paged(page.normalized()).await?)
    }

    async fn search(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<PageResult<Property>, GuardError> {
        Ok(self
            .query
            .search(filter.normalized(), page.normalized())
            .await?)
    }
}
