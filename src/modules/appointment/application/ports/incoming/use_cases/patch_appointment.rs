use async_trait::async_trait;

use crate::modules::appointment::application::domain::entities::{
    Appointment, AppointmentPatch,
};
use crate::shared::patch::{GuardError, PatchOutcome};

#[async_trait]
pub trait PatchAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        patch: AppointmentPatch,
    ) -> Result<PatchOutcome<Appointment>, GuardError>;
}
