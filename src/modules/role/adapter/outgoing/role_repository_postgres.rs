use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::role::application::domain::entities::{NewRole, Role, RolePatch};
use crate::modules::role::application::ports::outgoing::RoleRepository;
use crate::shared::db::{map_db_err, stage, stage_nullable};
use crate::shared::patch::{PatchStore, StoreError, UniqueLookup};

use super::sea_orm_entity::roles::{
    ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as RoleEntity,
};

#[derive(Clone, Debug)]
pub struct RoleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn stage_role_patch(patch: &RolePatch) -> RoleActiveModel {
    RoleActiveModel {
        name: stage(patch.name.clone()),
        description: stage_nullable(patch.description.clone()),
        ..Default::default()
    }
}

// Role names are not unique.
impl UniqueLookup for RoleRepositoryPostgres {}

#[async_trait]
impl PatchStore<RolePatch> for RoleRepositoryPostgres {
    type Row = Role;

    async fn fetch(&self, id: i32) -> Result<Option<Role>, StoreError> {
        let model = RoleEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Role::from))
    }

    async fn apply(&self, id: i32, patch: &RolePatch) -> Result<u64, StoreError> {
        let result = RoleEntity::update_many()
            .set(stage_role_patch(patch))
            .filter(RoleColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl RoleRepository for RoleRepositoryPostgres {
    async fn create_role(&self, data: NewRole) -> Result<Role, StoreError> {
        let inserted = RoleActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(inserted.into())
    }
}
