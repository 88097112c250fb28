use async_trait::async_trait;

use crate::modules::property::application::domain::entities::{Property, PropertyFilter};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::StoreError;

/// Reads over live (not soft-deleted) rows, ordered by id.
#[async_trait]
pub trait PropertyQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Property>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Property>, StoreError>;

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Property>, StoreError>;

    async fn search(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<PageResult<Property>, StoreError>;
}
