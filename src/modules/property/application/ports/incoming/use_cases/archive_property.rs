use async_trait::async_trait;

use crate::shared::patch::GuardError;

/// Soft delete and its inverse.
#[async_trait]
pub trait ArchivePropertyUseCase: Send + Sync {
    async fn delete(&self, id: i32) -> Result<(), GuardError>;

    async fn restore(&self, id: i32) -> Result<(), GuardError>;
}
