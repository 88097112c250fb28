use async_trait::async_trait;

use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::incoming::use_cases::GetAppointmentsUseCase;
use crate::modules::appointment::application::ports::outgoing::AppointmentQuery;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::GuardError;

pub struct GetAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    query: Q,
}

impl<Q> GetAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAppointmentsUseCase for GetAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    async fn get(&self, id: i32) -> Result<Appointment, GuardError> {
        self.query.find_by_id(id).await?.ok_or(GuardError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Appointment>, GuardError> {
        Ok(self.query.list_all().await?)
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Appointment>, GuardError> {
        Ok(self.query.list_paged(page.normalized()).await?)
    }
}
