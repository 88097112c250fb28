use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::outgoing::AppointmentQuery;
use crate::shared::db::map_db_err;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::StoreError;

use super::sea_orm_entity::appointments::{
    Column as AppointmentColumn, Entity as AppointmentEntity, Model as AppointmentModel,
};

#[derive(Debug, Clone)]
pub struct AppointmentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn live() -> Select<AppointmentEntity> {
    AppointmentEntity::find()
        .filter(AppointmentColumn::IsDeleted.eq(false))
        .order_by_asc(AppointmentColumn::Id)
}

fn to_appointments(models: Vec<AppointmentModel>) -> Result<Vec<Appointment>, StoreError> {
    models.into_iter().map(AppointmentModel::to_domain).collect()
}

#[async_trait]
impl AppointmentQuery for AppointmentQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, StoreError> {
        live()
            .filter(AppointmentColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(AppointmentModel::to_domain)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, StoreError> {
        let models = live().all(&*self.db).await.map_err(map_db_err)?;
        to_appointments(models)
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Appointment>, StoreError> {
        let total = live().count(&*self.db).await.map_err(map_db_err)?;

        let models = live()
            .offset(page.offset())
            .limit(page.page_size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(to_appointments(models)?, page, total))
    }
}
