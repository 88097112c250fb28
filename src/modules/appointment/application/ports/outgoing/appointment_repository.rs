use async_trait::async_trait;

use crate::modules::appointment::application::domain::entities::{
    Appointment, AppointmentPatch, NewAppointment,
};
use crate::shared::patch::{FieldError, PatchStore, StoreError};

#[async_trait]
pub trait AppointmentRepository: PatchStore<AppointmentPatch, Row = Appointment> {
    async fn user_exists(&self, user_id: i32) -> Result<bool, StoreError>;

    /// Soft-deleted properties do not count.
    async fn live_property_exists(&self, property_id: i32) -> Result<bool, StoreError>;

    async fn create_appointment(&self, data: NewAppointment) -> Result<Appointment, StoreError>;

    /// `false` when no live row matched.
    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError>;
}

/// Reference check on `assignedStaffId`, shared by create and patch.
pub async fn staff_errors<R>(
    repository: &R,
    staff_id: Option<i32>,
) -> Result<Vec<FieldError>, StoreError>
where
    R: AppointmentRepository + ?Sized,
{
    match staff_id {
        Some(id) if !repository.user_exists(id).await? => Ok(vec![FieldError::new(
            "assignedStaffId",
            format!("user {id} does not exist"),
        )]),
        _ => Ok(Vec::new()),
    }
}
