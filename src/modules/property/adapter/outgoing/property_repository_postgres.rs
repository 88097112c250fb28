use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::modules::property::application::domain::entities::{
    NewProperty, Property, PropertyPatch, PropertyStatus,
};
use crate::modules::property::application::ports::outgoing::{
    approver_errors, PropertyRepository,
};
use crate::modules::user::adapter::outgoing::sea_orm_entity::users;
use crate::shared::db::{map_db_err, map_write_err, stage, stage_nullable, to_db_time};
use crate::shared::patch::{
    FieldError, PatchField, PatchStore, StoreError, UniqueField, UniqueLookup,
};

use super::sea_orm_entity::properties::{
    ActiveModel as PropertyActiveModel, Column as PropertyColumn, Entity as PropertyEntity,
};

pub(crate) const PROPERTY_UNIQUE_INDEXES: &[(&str, UniqueField)] =
    &[("idx_properties_code_unique", UniqueField::PropertyCode)];

#[derive(Clone, Debug)]
pub struct PropertyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert<C>(conn: &C, data: NewProperty) -> Result<Property, StoreError>
    where
        C: ConnectionTrait,
    {
        new_property_model(data)
            .insert(conn)
            .await
            .map_err(|e| map_write_err(e, PROPERTY_UNIQUE_INDEXES))?
            .to_domain()
    }
}

fn new_property_model(data: NewProperty) -> PropertyActiveModel {
    PropertyActiveModel {
        id: NotSet,
        region_id: Set(data.region_id),
        approved_by: Set(data.approved_by),
        property_name: Set(data.property_name),
        property_code: Set(data.property_code),
        room_number: Set(data.room_number),
        address: Set(data.address),
        description: Set(data.description),
        area: Set(data.area),
        bedrooms: Set(data.bedrooms),
        bathrooms: Set(data.bathrooms),
        max_tenants: Set(data.max_tenants),
        rent_price: Set(data.rent_price),
        rent_deposit: Set(data.rent_deposit),
        property_fee: Set(data.property_fee),
        latitude: Set(data.latitude),
        longitude: Set(data.longitude),
        status: Set(PropertyStatus::PendingReview.into()),
        lease_type: Set(data.lease_type.into()),
        lease_term: Set(data.lease_term.into()),
        available_date: Set(data.available_date.map(to_db_time)),
        approved_at: Set(None),
        created_at: Set(to_db_time(Utc::now())),
        updated_at: Set(None),
        is_deleted: Set(false),
        deleted_at: Set(None),
    }
}

/// One column assignment per present field, plus the write stamps.
pub(crate) fn stage_property_patch(patch: &PropertyPatch) -> PropertyActiveModel {
    let mut model = PropertyActiveModel {
        region_id: stage_nullable(patch.region_id.clone()),
        approved_by: stage_nullable(patch.approved_by.clone()),
        property_name: stage(patch.property_name.clone()),
        property_code: stage(patch.property_code.clone()),
        room_number: stage_nullable(patch.room_number.clone()),
        address: stage(patch.address.clone()),
        description: stage_nullable(patch.description.clone()),
        area: stage(patch.area.clone()),
        bedrooms: stage(patch.bedrooms.clone()),
        bathrooms: stage(patch.bathrooms.clone()),
        max_tenants: stage(patch.max_tenants.clone()),
        rent_price: stage(patch.rent_price.clone()),
        rent_deposit: stage(patch.rent_deposit.clone()),
        property_fee: stage(patch.property_fee.clone()),
        latitude: stage(patch.latitude.clone()),
        longitude: stage(patch.longitude.clone()),
        status: stage(patch.status.clone().map(i32::from)),
        lease_type: stage(patch.lease_type.clone().map(i32::from)),
        lease_term: stage(patch.lease_term.clone().map(i32::from)),
        available_date: stage_nullable(patch.available_date.clone().map(to_db_time)),
        ..Default::default()
    };

    if let Some(now) = patch.stamped_at.map(to_db_time) {
        model.updated_at = Set(Some(now));
        match patch.approved_by {
            PatchField::Value(_) => model.approved_at = Set(Some(now)),
            PatchField::Null => model.approved_at = Set(None),
            PatchField::Unset => {}
        }
    }

    model
}

#[async_trait]
impl UniqueLookup for PropertyRepositoryPostgres {
    async fn owner_of(&self, field: UniqueField, value: &str) -> Result<Option<i32>, StoreError> {
        if field != UniqueField::PropertyCode {
            return Ok(None);
        }

        // Deleted rows still hold their code.
        let owner = PropertyEntity::find()
            .filter(PropertyColumn::PropertyCode.eq(value))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(owner.map(|m| m.id))
    }
}

#[async_trait]
impl PatchStore<PropertyPatch> for PropertyRepositoryPostgres {
    type Row = Property;

    async fn fetch(&self, id: i32) -> Result<Option<Property>, StoreError> {
        PropertyEntity::find_by_id(id)
            .filter(PropertyColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn check_references(&self, patch: &PropertyPatch) -> Result<Vec<FieldError>, StoreError> {
        approver_errors(self, patch.approved_by.as_value().copied()).await
    }

    async fn apply(&self, id: i32, patch: &PropertyPatch) -> Result<u64, StoreError> {
        let result = PropertyEntity::update_many()
            .set(stage_property_patch(patch))
            .filter(PropertyColumn::Id.eq(id))
            .filter(PropertyColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| map_write_err(e, PROPERTY_UNIQUE_INDEXES))?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryPostgres {
    async fn approver_exists(&self, user_id: i32) -> Result<bool, StoreError> {
        let count = users::Entity::find_by_id(user_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count > 0)
    }

    async fn create_property(&self, data: NewProperty) -> Result<Property, StoreError> {
        Self::insert(&*self.db, data).await
    }

    async fn create_properties(&self, data: Vec<NewProperty>) -> Result<Vec<Property>, StoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let mut created = Vec::with_capacity(data.len());

        for item in data {
            match Self::insert(&txn, item).await {
                Ok(property) => created.push(property),
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(e);
                }
            }
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(created)
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = PropertyEntity::update_many()
            .col_expr(PropertyColumn::IsDeleted, Expr::value(true))
            .col_expr(
                PropertyColumn::DeletedAt,
                Expr::value(to_db_time(Utc::now())),
            )
            .filter(PropertyColumn::Id.eq(id))
            .filter(PropertyColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn restore(&self, id: i32) -> Result<bool, StoreError> {
        let result = PropertyEntity::update_many()
            .col_expr(PropertyColumn::IsDeleted, Expr::value(false))
            .col_expr(
                PropertyColumn::DeletedAt,
                Expr::value(Option::<chrono::DateTime<chrono::FixedOffset>>::None),
            )
            .filter(PropertyColumn::Id.eq(id))
            .filter(PropertyColumn::IsDeleted.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}
