use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::modules::user_role::application::ports::outgoing::UserRoleQuery;
use crate::shared::db::map_db_err;
use crate::shared::patch::StoreError;

use super::sea_orm_entity::user_roles::{Column as UserRoleColumn, Entity as UserRoleEntity};

#[derive(Debug, Clone)]
pub struct UserRoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRoleQuery for UserRoleQueryPostgres {
    async fn list_all(&self) -> Result<Vec<UserRole>, StoreError> {
        let models = UserRoleEntity::find()
            .order_by_asc(UserRoleColumn::UserId)
            .order_by_asc(UserRoleColumn::RoleId)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(UserRole::from).collect())
    }
}
