use std::sync::Arc;

use crate::modules::appointment::application::ports::incoming::use_cases::{
    CreateAppointmentUseCase, DeleteAppointmentUseCase, GetAppointmentsUseCase,
    PatchAppointmentUseCase,
};

#[derive(Clone)]
pub struct AppointmentUseCases {
    pub create: Arc<dyn CreateAppointmentUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchAppointmentUseCase + Send + Sync>,
    pub get: Arc<dyn GetAppointmentsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAppointmentUseCase + Send + Sync>,
}
