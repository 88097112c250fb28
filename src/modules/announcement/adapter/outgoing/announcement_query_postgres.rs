use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;

use crate::modules::announcement::application::domain::entities::Announcement;
use crate::modules::announcement::application::ports::outgoing::AnnouncementQuery;
use crate::shared::db::map_db_err;
use crate::shared::patch::StoreError;

use super::sea_orm_entity::announcements::{
    Column as AnnouncementColumn, Entity as AnnouncementEntity, Model as AnnouncementModel,
};

#[derive(Debug, Clone)]
pub struct AnnouncementQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AnnouncementQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn all(&self, select: Select<AnnouncementEntity>) -> Result<Vec<Announcement>, StoreError> {
        select
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(AnnouncementModel::to_domain)
            .collect()
    }
}

fn with_deleted(deleted: bool) -> Select<AnnouncementEntity> {
    AnnouncementEntity::find().filter(AnnouncementColumn::IsDeleted.eq(deleted))
}

// Postgres sorts NULL first under DESC, so unpublished drafts lead.
fn newest_first(select: Select<AnnouncementEntity>) -> Select<AnnouncementEntity> {
    select
        .order_by_desc(AnnouncementColumn::PublishTime)
        .order_by_desc(AnnouncementColumn::Id)
}

#[async_trait]
impl AnnouncementQuery for AnnouncementQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, StoreError> {
        with_deleted(false)
            .filter(AnnouncementColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(AnnouncementModel::to_domain)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Announcement>, StoreError> {
        self.all(newest_first(with_deleted(false))).await
    }

    async fn list_deleted(&self) -> Result<Vec<Announcement>, StoreError> {
        self.all(newest_first(with_deleted(true))).await
    }
}
