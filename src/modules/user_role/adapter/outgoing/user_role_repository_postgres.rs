use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::role::adapter::outgoing::sea_orm_entity::roles;
use crate::modules::user::adapter::outgoing::sea_orm_entity::users;
use crate::modules::user_role::application::domain::entities::UserRole;
use crate::modules::user_role::application::ports::outgoing::UserRoleRepository;
use crate::shared::db::map_db_err;
use crate::shared::patch::StoreError;

use super::sea_orm_entity::user_roles::{
    ActiveModel as UserRoleActiveModel, Column as UserRoleColumn, Entity as UserRoleEntity,
};

#[derive(Clone, Debug)]
pub struct UserRoleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRoleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRoleRepository for UserRoleRepositoryPostgres {
    async fn existing_user_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, StoreError> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i32> = users::Entity::find()
            .select_only()
            .column(users::Column::Id)
            .filter(users::Column::Id.is_in(ids.iter().copied()))
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.into_iter().collect())
    }

    async fn existing_role_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, StoreError> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i32> = roles::Entity::find()
            .select_only()
            .column(roles::Column::Id)
            .filter(roles::Column::Id.is_in(ids.iter().copied()))
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.into_iter().collect())
    }

    async fn existing_pairs(
        &self,
        user_ids: &[i32],
        role_ids: &[i32],
    ) -> Result<HashSet<UserRole>, StoreError> {
        if user_ids.is_empty() || role_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let models = UserRoleEntity::find()
            .filter(UserRoleColumn::UserId.is_in(user_ids.iter().copied()))
            .filter(UserRoleColumn::RoleId.is_in(role_ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(UserRole::from).collect())
    }

    async fn insert_pairs(&self, pairs: &[UserRole]) -> Result<u64, StoreError> {
        if pairs.is_empty() {
            return Ok(0);
        }

        UserRoleEntity::insert_many(pairs.iter().copied().map(UserRoleActiveModel::from))
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn replace_roles(&self, user_id: i32, role_ids: &[i32]) -> Result<(), StoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = UserRoleEntity::delete_many()
            .filter(UserRoleColumn::UserId.eq(user_id))
            .exec(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        if !role_ids.is_empty() {
            let models = role_ids
                .iter()
                .map(|&role_id| UserRoleActiveModel::from(UserRole { user_id, role_id }));
            if let Err(e) = UserRoleEntity::insert_many(models)
                .exec_without_returning(&txn)
                .await
            {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        }

        txn.commit().await.map_err(map_db_err)
    }
}
