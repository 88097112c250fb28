use async_trait::async_trait;
use tracing::info;

use crate::modules::appointment::application::domain::entities::{Appointment, NewAppointment};
use crate::modules::appointment::application::ports::incoming::use_cases::CreateAppointmentUseCase;
use crate::modules::appointment::application::ports::outgoing::{
    staff_errors, AppointmentRepository,
};
use crate::shared::patch::{guard_create, FieldError, GuardError};

pub struct CreateAppointmentService<R>
where
    R: AppointmentRepository,
{
    repository: R,
}

impl<R> CreateAppointmentService<R>
where
    R: AppointmentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn reference_errors(&self, input: &NewAppointment) -> Result<Vec<FieldError>, GuardError> {
        let mut errors = Vec::new();

        if !self.repository.user_exists(input.user_id).await? {
            errors.push(FieldError::new(
                "userId",
                format!("user {} does not exist", input.user_id),
            ));
        }
        if !self.repository.live_property_exists(input.property_id).await? {
            errors.push(FieldError::new(
                "propertyId",
                format!("property {} does not exist", input.property_id),
            ));
        }
        errors.extend(staff_errors(&self.repository, input.assigned_staff_id).await?);

        Ok(errors)
    }
}

#[async_trait]
impl<R> CreateAppointmentUseCase for CreateAppointmentService<R>
where
    R: AppointmentRepository,
{
    async fn execute(&self, input: NewAppointment) -> Result<Appointment, GuardError> {
        let input = input.normalized();
        let references = self.reference_errors(&input).await?;
        guard_create(&self.repository, &input, references).await?;

        let appointment = self.repository.create_appointment(input).await?;
        info!(
            "Created appointment {} for property {}",
            appointment.id, appointment.property_id
        );
        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::appointment::application::domain::entities::AppointmentStatus;
    use crate::modules::property::application::domain::entities::Property;
    use crate::tests::support::fixtures::{new_appointment, seeded_property, seeded_user};
    use crate::tests::support::in_memory::InMemoryStore;
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_starts_pending() {
        let store = InMemoryStore::default();
        let tenant = store.insert_user(seeded_user("tenant01", "110101199001011234"));
        let staff = store.insert_user(seeded_user("staff001", "110101199001011235"));
        let property = store.insert_property(seeded_property("GZ-TH-001"));
        let service = CreateAppointmentService::new(store.clone());

        let appointment = service
            .execute(NewAppointment {
                assigned_staff_id: Some(staff.id),
                ..new_appointment(tenant.id, property.id)
            })
            .await
            .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert!(appointment.assignment_time.is_some());
        assert_eq!(store.appointment(appointment.id), Some(appointment));
    }

    #[tokio::test]
    async fn test_every_missing_reference_is_reported() {
        let store = InMemoryStore::default();
        let deleted = store.insert_property(Property {
            is_deleted: true,
            deleted_at: Some(Utc::now()),
            ..seeded_property("GZ-TH-001")
        });
        let service = CreateAppointmentService::new(store.clone());

        let err = service
            .execute(NewAppointment {
                assigned_staff_id: Some(77),
                ..new_appointment(5, deleted.id)
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GuardError::Validation(vec![
                FieldError::new("userId", "user 5 does not exist"),
                FieldError::new("propertyId", format!("property {} does not exist", deleted.id)),
                FieldError::new("assignedStaffId", "user 77 does not exist"),
            ])
        );
        assert_eq!(store.appointment_count(), 0);
    }

    #[tokio::test]
    async fn test_end_before_start_is_rejected() {
        let store = InMemoryStore::default();
        let tenant = store.insert_user(seeded_user("tenant01", "110101199001011234"));
        let property = store.insert_property(seeded_property("GZ-TH-001"));
        let service = CreateAppointmentService::new(store.clone());
        let start = Utc::now();

        let err = service
            .execute(NewAppointment {
                appointment_time: Some(start),
                appointment_end_time: Some(start - chrono::Duration::minutes(30)),
                ..new_appointment(tenant.id, property.id)
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GuardError::Validation(vec![FieldError::new(
                "appointmentEndTime",
                "must be after appointmentTime"
            )])
        );
    }
}
