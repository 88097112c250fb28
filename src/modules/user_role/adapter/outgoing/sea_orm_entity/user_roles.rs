use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::modules::user_role::application::domain::entities::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserRole {
    fn from(m: Model) -> Self {
        UserRole {
            user_id: m.user_id,
            role_id: m.role_id,
        }
    }
}

impl From<UserRole> for ActiveModel {
    fn from(pair: UserRole) -> Self {
        ActiveModel {
            user_id: Set(pair.user_id),
            role_id: Set(pair.role_id),
        }
    }
}
