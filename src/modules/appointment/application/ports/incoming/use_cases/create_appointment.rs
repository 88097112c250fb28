use async_trait::async_trait;

use crate::modules::appointment::application::domain::entities::{Appointment, NewAppointment};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait CreateAppointmentUseCase: Send + Sync {
    async fn execute(&self, input: NewAppointment) -> Result<Appointment, GuardError>;
}
