use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::modules::permission::application::domain::entities::{NewPermission, Permission};
use crate::modules::permission::application::ports::outgoing::PermissionRepository;
use crate::shared::db::map_db_err;
use crate::shared::patch::{StoreError, UniqueLookup};

use super::sea_orm_entity::permissions::{
    ActiveModel as PermissionActiveModel, Entity as PermissionEntity,
};
use super::sea_orm_entity::role_permissions::{
    Column as RolePermissionColumn, Entity as RolePermissionEntity,
};

#[derive(Clone, Debug)]
pub struct PermissionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PermissionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl UniqueLookup for PermissionRepositoryPostgres {}

#[async_trait]
impl PermissionRepository for PermissionRepositoryPostgres {
    async fn create_permission(&self, data: NewPermission) -> Result<Permission, StoreError> {
        let inserted = PermissionActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            module: Set(data.module),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn delete_permission(&self, id: i32) -> Result<bool, StoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // The FK cascades too; deleting links first keeps older schemas consistent.
        RolePermissionEntity::delete_many()
            .filter(RolePermissionColumn::PermissionId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = PermissionEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}
