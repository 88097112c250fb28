mod create_appointment_service;
mod delete_appointment_service;
mod get_appointments_service;
mod patch_appointment_service;

pub use create_appointment_service::CreateAppointmentService;
pub use delete_appointment_service::DeleteAppointmentService;
pub use get_appointments_service::GetAppointmentsService;
pub use patch_appointment_service::PatchAppointmentService;
