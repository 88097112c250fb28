use async_trait::async_trait;
use tracing::info;

use crate::modules::permission::application::ports::incoming::use_cases::DeletePermissionUseCase;
use crate::modules::permission::application::ports::outgoing::PermissionRepository;
use crate::shared::patch::GuardError;

pub struct DeletePermissionService<R>
where
    R: PermissionRepository,
{
    repository: R,
}

impl<R> DeletePermissionService<R>
where
    R: PermissionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePermissionUseCase for DeletePermissionService<R>
where
    R: PermissionRepository,
{
    async fn execute(&self, id: i32) -> Result<(), GuardError> {
        if !self.repository.delete_permission(id).await? {
            return Err(GuardError::NotFound);
        }

        info!("Deleted permission {}", id);
        Ok(())
    }
}
