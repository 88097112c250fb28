use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::announcement::application::domain::entities::{
    Announcement, AnnouncementDraft, AnnouncementPatch,
};
use crate::modules::announcement::application::ports::outgoing::AnnouncementRepository;
use crate::shared::db::{map_db_err, stage, stage_nullable, to_db_time};
use crate::shared::patch::{PatchStore, StoreError, UniqueLookup};

use super::sea_orm_entity::announcements::{
    ActiveModel as AnnouncementActiveModel, Column as AnnouncementColumn,
    Entity as AnnouncementEntity,
};

#[derive(Clone, Debug)]
pub struct AnnouncementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AnnouncementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn set_deleted(&self, id: i32, deleted: bool) -> Result<bool, StoreError> {
        let result = AnnouncementEntity::update_many()
            .col_expr(AnnouncementColumn::IsDeleted, Expr::value(deleted))
            .filter(AnnouncementColumn::Id.eq(id))
            .filter(AnnouncementColumn::IsDeleted.eq(!deleted))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}

pub(crate) fn stage_announcement_patch(patch: &AnnouncementPatch) -> AnnouncementActiveModel {
    AnnouncementActiveModel {
        title: stage(patch.title.clone()),
        content: stage(patch.content.clone()),
        kind: stage(patch.kind.clone().map(i32::from)),
        status: stage(patch.status.clone().map(i32::from)),
        publish_time: stage_nullable(patch.publish_time.clone().map(to_db_time)),
        expire_time: stage_nullable(patch.expire_time.clone().map(to_db_time)),
        ..Default::default()
    }
}

impl UniqueLookup for AnnouncementRepositoryPostgres {}

#[async_trait]
impl PatchStore<AnnouncementPatch> for AnnouncementRepositoryPostgres {
    type Row = Announcement;

    async fn fetch(&self, id: i32) -> Result<Option<Announcement>, StoreError> {
        AnnouncementEntity::find_by_id(id)
            .filter(AnnouncementColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn apply(&self, id: i32, patch: &AnnouncementPatch) -> Result<u64, StoreError> {
        let result = AnnouncementEntity::update_many()
            .set(stage_announcement_patch(patch))
            .filter(AnnouncementColumn::Id.eq(id))
            .filter(AnnouncementColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl AnnouncementRepository for AnnouncementRepositoryPostgres {
    async fn create_announcement(
        &self,
        draft: AnnouncementDraft,
    ) -> Result<Announcement, StoreError> {
        AnnouncementActiveModel {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            kind: Set(draft.kind.into()),
            status: Set(draft.status.into()),
            publish_time: Set(draft.publish_time.map(to_db_time)),
            expire_time: Set(draft.expire_time.map(to_db_time)),
            is_deleted: Set(false),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?
        .to_domain()
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        self.set_deleted(id, true).await
    }

    async fn restore(&self, id: i32) -> Result<bool, StoreError> {
        self.set_deleted(id, false).await
    }

    async fn hard_delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = AnnouncementEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}
