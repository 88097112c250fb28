use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::property::application::domain::entities::{Property, PropertyFilter};
use crate::modules::property::application::ports::outgoing::PropertyQuery;
use crate::shared::db::{lower_contains, map_db_err};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::StoreError;

use super::sea_orm_entity::properties::{
    Column as PropertyColumn, Entity as PropertyEntity, Model as PropertyModel,
};

#[derive(Debug, Clone)]
pub struct PropertyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn page(
        &self,
        select: Select<PropertyEntity>,
        page: PageRequest,
    ) -> Result<PageResult<Property>, StoreError> {
        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = select
            .order_by_asc(PropertyColumn::Id)
            .offset(page.offset())
            .limit(page.page_size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(to_properties(models)?, page, total))
    }
}

fn live() -> Select<PropertyEntity> {
    PropertyEntity::find().filter(PropertyColumn::IsDeleted.eq(false))
}

fn to_properties(models: Vec<PropertyModel>) -> Result<Vec<Property>, StoreError> {
    models.into_iter().map(PropertyModel::to_domain).collect()
}

pub(crate) fn search_condition(filter: &PropertyFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(keyword) = &filter.keyword {
        cond = cond.add(
            Condition::any()
                .add(lower_contains(PropertyColumn::PropertyName, keyword))
                .add(lower_contains(PropertyColumn::Address, keyword))
                .add(lower_contains(PropertyColumn::PropertyCode, keyword)),
        );
    }
    if let Some(status) = filter.status {
        cond = cond.add(PropertyColumn::Status.eq(i32::from(status)));
    }
    if let Some(lease_type) = filter.lease_type {
        cond = cond.add(PropertyColumn::LeaseType.eq(i32::from(lease_type)));
    }
    if let Some(lease_term) = filter.lease_term {
        cond = cond.add(PropertyColumn::LeaseTerm.eq(i32::from(lease_term)));
    }
    if let Some(region_id) = filter.region_id {
        cond = cond.add(PropertyColumn::RegionId.eq(region_id));
    }
    if let Some(min_rent) = filter.min_rent {
        cond = cond.add(PropertyColumn::RentPrice.gte(min_rent));
    }
    if let Some(max_rent) = filter.max_rent {
        cond = cond.add(PropertyColumn::RentPrice.lte(max_rent));
    }
    if let Some(min_bedrooms) = filter.min_bedrooms {
        cond = cond.add(PropertyColumn::Bedrooms.gte(min_bedrooms));
    }

    cond
}

#[async_trait]
impl PropertyQuery for PropertyQueryPostgres {
    async fn find_by_id(&self, id: i32) -> Result<Option<Property>, StoreError> {
        live()
            .filter(PropertyColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(PropertyModel::to_domain)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Property>, StoreError> {
        let models = live()
            .order_by_asc(PropertyColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_properties(models)
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Property>, StoreError> {
        self.page(live(), page).await
    }

    async fn search(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<PageResult<Property>, StoreError> {
        self.page(live().filter(search_condition(&filter)), page)
            .await
    }
}
