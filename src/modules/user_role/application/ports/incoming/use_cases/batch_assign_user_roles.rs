use async_trait::async_trait;

use crate::modules::user_role::application::domain::entities::BatchAssignReport;
use crate::shared::patch::GuardError;

#[async_trait]
pub trait BatchAssignUserRolesUseCase: Send + Sync {
    /// Grants every known role to every known user, skipping pairs already held.
    async fn execute(
        &self,
        user_ids: Vec<i32>,
        role_ids: Vec<i32>,
    ) -> Result<BatchAssignReport, GuardError>;
}
