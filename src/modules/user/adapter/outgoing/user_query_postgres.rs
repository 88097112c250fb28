use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::user::application::domain::entities::{User, UserFilter};
use crate::modules::user::application::ports::outgoing::UserQuery;
use crate::modules::user_role::adapter::outgoing::sea_orm_entity::user_roles;
use crate::shared::db::{lower_contains, map_db_err};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::StoreError;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn page(
        &self,
        select: Select<UserEntity>,
        page: PageRequest,
    ) -> Result<PageResult<User>, StoreError> {
        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = select
            .order_by_asc(UserColumn::Id)
            .offset(page.offset())
            .limit(page.page_size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(to_users(models)?, page, total))
    }
}

fn to_users(models: Vec<UserModel>) -> Result<Vec<User>, StoreError> {
    models.into_iter().map(UserModel::to_domain).collect()
}

pub(crate) fn search_condition(filter: &UserFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(username) = &filter.username {
        cond = cond.add(lower_contains(UserColumn::Username, username));
    }
    if let Some(real_name) = &filter.real_name {
        cond = cond.add(lower_contains(UserColumn::RealName, real_name));
    }
    if let Some(email) = &filter.email {
        cond = cond.add(lower_contains(UserColumn::Email, email));
    }
    if let Some(phone) = &filter.phone {
        cond = cond.add(lower_contains(UserColumn::Phone, phone));
    }
    if let Some(gender) = filter.gender {
        cond = cond.add(UserColumn::Gender.eq(gender.as_str()));
    }
    if let Some(status) = filter.status {
        cond = cond.add(UserColumn::Status.eq(status));
    }

    cond
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(UserModel::to_domain)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let models = UserEntity::find()
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_users(models)
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<User>, StoreError> {
        self.page(UserEntity::find(), page).await
    }

    async fn search(&self, filter: UserFilter) -> Result<Vec<User>, StoreError> {
        let models = UserEntity::find()
            .filter(search_condition(&filter))
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_users(models)
    }

    async fn list_without_role(&self, page: PageRequest) -> Result<PageResult<User>, StoreError> {
        let assigned = Query::select()
            .column(user_roles::Column::UserId)
            .from(user_roles::Entity)
            .to_owned();

        self.page(
            UserEntity::find().filter(UserColumn::Id.not_in_subquery(assigned)),
            page,
        )
        .await
    }
}
