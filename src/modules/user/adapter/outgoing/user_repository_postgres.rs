use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::user::application::domain::entities::{User, UserPatch};
use crate::modules::user::application::ports::outgoing::{CreateUserData, UserRepository};
use crate::shared::db::{map_db_err, map_write_err, stage, stage_nullable};
use crate::shared::patch::{PatchStore, StoreError, UniqueField, UniqueLookup};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

pub(crate) const USER_UNIQUE_INDEXES: &[(&str, UniqueField)] = &[
    ("idx_users_username_unique", UniqueField::Username),
    ("idx_users_id_card_unique", UniqueField::IdCard),
];

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find(&self, id: i32) -> Result<Option<User>, StoreError> {
        UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
    }
}

/// One column assignment per present field.
pub(crate) fn stage_user_patch(patch: &UserPatch) -> UserActiveModel {
    #[allow(unused_mut)]
    let mut model = UserActiveModel {
        username: stage(patch.username.clone()),
        password_hash: stage(patch.password.clone()),
        email: stage_nullable(patch.email.clone()),
        phone: stage_nullable(patch.phone.clone()),
        real_name: stage_nullable(patch.real_name.clone()),
        id_card: stage_nullable(patch.id_card.clone()),
        gender: stage_nullable(patch.gender.clone()),
        avatar_url: stage_nullable(patch.avatar_url.clone()),
        ..Default::default()
    };

    #[cfg(feature = "no_db_triggers")]
    {
        model.updated_at = Set(chrono::Utc::now().fixed_offset());
    }

    model
}

#[async_trait]
impl UniqueLookup for UserRepositoryPostgres {
    async fn owner_of(&self, field: UniqueField, value: &str) -> Result<Option<i32>, StoreError> {
        let column = match field {
            UniqueField::Username => UserColumn::Username,
            UniqueField::IdCard => UserColumn::IdCard,
            UniqueField::PropertyCode => return Ok(None),
        };

        let owner = UserEntity::find()
            .filter(column.eq(value))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(owner.map(|m| m.id))
    }
}

#[async_trait]
impl PatchStore<UserPatch> for UserRepositoryPostgres {
    type Row = User;

    async fn fetch(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.find(id).await
    }

    async fn apply(&self, id: i32, patch: &UserPatch) -> Result<u64, StoreError> {
        let result = UserEntity::update_many()
            .set(stage_user_patch(patch))
            .filter(UserColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| map_write_err(e, USER_UNIQUE_INDEXES))?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, StoreError> {
        let model = UserActiveModel {
            id: NotSet,
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            email: Set(Some(data.email)),
            phone: Set(Some(data.phone)),
            real_name: Set(Some(data.real_name)),
            id_card: Set(Some(data.id_card)),
            gender: Set(Some(data.gender.as_str().to_string())),
            avatar_url: Set(data.avatar_url),
            status: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(|e| map_write_err(e, USER_UNIQUE_INDEXES))?;

        inserted.to_domain()
    }

    async fn set_status(&self, id: i32, status: bool) -> Result<Option<User>, StoreError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Status, Expr::value(status))
            .filter(UserColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.find(id).await
    }
}
