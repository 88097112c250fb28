use async_trait::async_trait;

use crate::modules::role::application::domain::entities::{NewRole, Role, RolePatch};
use crate::shared::patch::{PatchStore, StoreError};

#[async_trait]
pub trait RoleRepository: PatchStore<RolePatch, Row = Role> {
    async fn create_role(&self, data: NewRole) -> Result<Role, StoreError>;
}
