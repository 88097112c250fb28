use async_trait::async_trait;

use crate::shared::patch::GuardError;

/// Soft delete.
#[async_trait]
pub trait DeleteAppointmentUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), GuardError>;
}
