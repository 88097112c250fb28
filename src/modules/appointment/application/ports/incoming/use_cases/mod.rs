mod create_appointment;
mod delete_appointment;
mod get_appointments;
mod patch_appointment;

pub use create_appointment::CreateAppointmentUseCase;
pub use delete_appointment::DeleteAppointmentUseCase;
pub use get_appointments::GetAppointmentsUseCase;
pub use patch_appointment::PatchAppointmentUseCase;
