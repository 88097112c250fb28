use async_trait::async_trait;
use tracing::info;

use crate::modules::appointment::application::ports::incoming::use_cases::DeleteAppointmentUseCase;
use crate::modules::appointment::application::ports::outgoing::AppointmentRepository;
use crate::shared::patch::GuardError;

pub struct DeleteAppointmentService<R>
where
    R: AppointmentRepository,
{
    repository: R,
}

impl<R> DeleteAppointmentService<R>
where
    R: AppointmentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAppointmentUseCase for DeleteAppointmentService<R>
where
    R: AppointmentRepository,
{
    async fn execute(&self, id: i32) -> Result<(), GuardError> {
        if !self.repository.soft_delete(id).await? {
            return Err(GuardError::NotFound);
        }
        info!("Soft-deleted appointment {}", id);
        Ok(())
    }
}
