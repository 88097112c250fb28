use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::permission::application::domain::entities::{Permission, RolePermission};
use crate::modules::permission::application::ports::outgoing::PermissionQuery;
use crate::shared::db::map_db_err;
use crate::shared::patch::StoreError;

use super::sea_orm_entity::permissions::{Column as PermissionColumn, Entity as PermissionEntity};
use super::sea_orm_entity::role_permissions::{
    Column as RolePermissionColumn, Entity as RolePermissionEntity,
};

#[derive(Debug, Clone)]
pub struct PermissionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PermissionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PermissionQuery for PermissionQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<Permission>, StoreError> {
        let model = PermissionEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Permission::from))
    }

    async fn list_all(&self) -> Result<Vec<Permission>, StoreError> {
        let models = PermissionEntity::find()
            .order_by_asc(PermissionColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(Permission::from).collect())
    }

    async fn list_role_permissions(&self) -> Result<Vec<RolePermission>, StoreError> {
        let models = RolePermissionEntity::find()
            .order_by_asc(RolePermissionColumn::RoleId)
            .order_by_asc(RolePermissionColumn::PermissionId)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(RolePermission::from).collect())
    }
}
