use async_trait::async_trait;

use crate::modules::property::application::domain::entities::{Property, PropertyFilter};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait GetPropertiesUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Property, GuardError>;

    async fn list(&self) -> Result<Vec<Property>, GuardError>;

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Property>, GuardError>;

    async fn search(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<PageResult<Property>, GuardError>;
}
