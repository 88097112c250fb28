use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::appointment::application::domain::entities::{
    Appointment, AppointmentPatch,
};
use crate::modules::appointment::application::ports::incoming::use_cases::PatchAppointmentUseCase;
use crate::modules::appointment::application::ports::outgoing::AppointmentRepository;
use crate::shared::patch::{check_patch, commit_patch, CheckedPatch, GuardError, PatchOutcome};

pub struct PatchAppointmentService<R>
where
    R: AppointmentRepository,
{
    repository: R,
}

impl<R> PatchAppointmentService<R>
where
    R: AppointmentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchAppointmentUseCase for PatchAppointmentService<R>
where
    R: AppointmentRepository,
{
    async fn execute(
        &self,
        id: i32,
        patch: AppointmentPatch,
    ) -> Result<PatchOutcome<Appointment>, GuardError> {
        let checked = check_patch(&self.repository, id, patch).await?;
        let checked = CheckedPatch {
            patch: checked.patch.stamped(Utc::now()),
            ..checked
        };

        let outcome = commit_patch(&self.repository, checked).await?;

        if outcome.affected_rows > 0 {
            info!(
                "Patched appointment {}: {}",
                outcome.id,
                outcome.updated_fields.join(", ")
            );
        }
        Ok(outcome)
    }
}
