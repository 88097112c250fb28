use async_trait::async_trait;

use crate::modules::appointment::application::domain::entities::Appointment;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait GetAppointmentsUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Appointment, GuardError>;
    async fn list(&self) -> Result<Vec<Appointment>, GuardError>;
    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Appointment>, GuardError>;
}
