use sea_orm::entity::prelude::*;

use crate::modules::property::application::domain::entities::Property;
use crate::shared::db::from_db_time;
use crate::shared::patch::StoreError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_id: Option<i32>,
    pub approved_by: Option<i32>,
    pub property_name: String,
    #[sea_orm(unique)]
    pub property_code: String,
    pub room_number: Option<String>,
    pub address: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub area: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_tenants: i32,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub rent_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub rent_deposit: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub property_fee: Decimal,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))")]
    pub latitude: Decimal,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))")]
    pub longitude: Decimal,
    pub status: i32,
    pub lease_type: i32,
    pub lease_term: i32,
    pub available_date: Option<DateTimeWithTimeZone>,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Fails on enum codes outside the mapping tables.
    pub fn to_domain(self) -> Result<Property, StoreError> {
        Ok(Property {
            id: self.id,
            region_id: self.region_id,
            approved_by: self.approved_by,
            property_name: self.property_name,
            property_code: self.property_code,
            room_number: self.room_number,
            address: self.address,
            description: self.description,
            area: self.area,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            max_tenants: self.max_tenants,
            rent_price: self.rent_price,
            rent_deposit: self.rent_deposit,
            property_fee: self.property_fee,
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status.try_into()?,
            lease_type: self.lease_type.try_into()?,
            lease_term: self.lease_term.try_into()?,
            available_date: self.available_date.map(from_db_time),
            approved_at: self.approved_at.map(from_db_time),
            created_at: from_db_time(self.created_at),
            updated_at: self.updated_at.map(from_db_time),
            is_deleted: self.is_deleted,
            deleted_at: self.deleted_at.map(from_db_time),
        })
    }
}
