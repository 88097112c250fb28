use sea_orm::entity::prelude::*;

use crate::modules::user::application::domain::entities::{Gender, User};
use crate::shared::db::from_db_time;
use crate::shared::patch::StoreError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub real_name: Option<String>,
    #[sea_orm(unique)]
    pub id_card: Option<String>,
    // "男" / "女"
    pub gender: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub avatar_url: Option<String>,
    pub status: bool,
    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> Result<User, StoreError> {
        let gender = match self.gender.as_deref() {
            None => None,
            Some(raw) => Some(Gender::parse(raw).ok_or_else(|| {
                StoreError::InvalidRow(format!("user {} has unknown gender {}", self.id, raw))
            })?),
        };

        Ok(User {
            id: self.id,
            username: self.username,
            password_hash: self.password_hash,
            email: self.email,
            phone: self.phone,
            real_name: self.real_name,
            id_card: self.id_card,
            gender,
            avatar_url: self.avatar_url,
            status: self.status,
            created_at: from_db_time(self.created_at),
            updated_at: from_db_time(self.updated_at),
        })
    }
}
