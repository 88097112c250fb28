use sea_orm::entity::prelude::*;

use crate::modules::announcement::application::domain::entities::Announcement;
use crate::shared::db::from_db_time;
use crate::shared::patch::StoreError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub kind: i32,
    pub status: i32,
    pub publish_time: Option<DateTimeWithTimeZone>,
    pub expire_time: Option<DateTimeWithTimeZone>,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> Result<Announcement, StoreError> {
        Ok(Announcement {
            id: self.id,
            title: self.title,
            content: self.content,
            kind: self.kind.try_into()?,
            status: self.status.try_into()?,
            publish_time: self.publish_time.map(from_db_time),
            expire_time: self.expire_time.map(from_db_time),
            is_deleted: self.is_deleted,
        })
    }
}
