use async_trait::async_trait;

use crate::modules::appointment::application::domain::entities::Appointment;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::StoreError;

/// Reads over live (not soft-deleted) rows, ordered by id.
#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Appointment>, StoreError>;

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Appointment>, StoreError>;
}
