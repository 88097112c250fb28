use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::property::application::domain::entities::{LeaseTerm, LeaseType, NewProperty};
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

// Text fields default to "" so they surface as field errors; numbers and codes are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub region_id: Option<i32>,
    pub approved_by: Option<i32>,
    #[serde(default)]
    pub property_name: String,
    #[serde(default)]
    pub property_code: String,
    pub room_number: Option<String>,
    #[serde(default)]
    pub address: String,
    pub description: Option<String>,
    pub area: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_tenants: i32,
    pub rent_price: Decimal,
    pub rent_deposit: Decimal,
    pub property_fee: Decimal,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub lease_type: LeaseType,
    pub lease_term: LeaseTerm,
    pub available_date: Option<DateTime<Utc>>,
}

impl From<CreatePropertyRequest> for NewProperty {
    fn from(req: CreatePropertyRequest) -> Self {
        NewProperty {
            region_id: req.region_id,
            approved_by: req.approved_by,
            property_name: req.property_name,
            property_code: req.property_code,
            room_number: req.room_number,
            address: req.address,
            description: req.description,
            area: req.area,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            max_tenants: req.max_tenants,
            rent_price: req.rent_price,
            rent_deposit: req.rent_deposit,
            property_fee: req.property_fee,
            latitude: req.latitude,
            longitude: req.longitude,
            lease_type: req.lease_type,
            lease_term: req.lease_term,
            available_date: req.available_date,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/properties")]
pub async fn create_property_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreatePropertyRequest>,
) -> impl Responder {
    match data.property.create.execute(payload.into_inner().into()).await {
        Ok(property) => ApiResponse::created(property),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}
