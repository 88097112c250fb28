mod create_appointment;
mod delete_appointment;
mod get_appointments;
mod patch_appointment;

pub use create_appointment::create_appointment_handler;
pub use delete_appointment::delete_appointment_handler;
pub use get_appointments::{
    get_appointment_handler, list_appointments_handler, list_appointments_paged_handler,
};
pub use patch_appointment::patch_appointment_handler;
