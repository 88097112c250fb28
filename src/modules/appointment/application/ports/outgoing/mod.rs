mod appointment_query;
mod appointment_repository;

pub use appointment_query::AppointmentQuery;
pub use appointment_repository::{staff_errors, AppointmentRepository};
