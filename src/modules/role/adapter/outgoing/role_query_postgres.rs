use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::role::application::domain::entities::Role;
use crate::modules::role::application::ports::outgoing::RoleQuery;
use crate::shared::db::map_db_err;
use crate::shared::patch::StoreError;

use super::sea_orm_entity::roles::{Column as RoleColumn, Entity as RoleEntity};

#[derive(Debug, Clone)]
pub struct RoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleQuery for RoleQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, StoreError> {
        let model = RoleEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Role::from))
    }

    async fn list_all(&self) -> Result<Vec<Role>, StoreError> {
        let models = RoleEntity::find()
            .order_by_asc(RoleColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(Role::from).collect())
    }
}
