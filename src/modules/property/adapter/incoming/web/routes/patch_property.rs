use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::property::application::domain::entities::{
    LeaseTerm, LeaseType, PropertyPatch, PropertyStatus,
};
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPropertyRequest {
    #[serde(default)]
    pub region_id: PatchField<i32>,
    #[serde(default)]
    pub approved_by: PatchField<i32>,
    #[serde(default)]
    pub property_name: PatchField<String>,
    #[serde(default)]
    pub property_code: PatchField<String>,
    #[serde(default)]
    pub room_number: PatchField<String>,
    #[serde(default)]
    pub address: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub area: PatchField<Decimal>,
    #[serde(default)]
    pub bedrooms: PatchField<i32>,
    #[serde(default)]
    pub bathrooms: PatchField<i32>,
    #[serde(default)]
    pub max_tenants: PatchField<i32>,
    #[serde(default)]
    pub rent_price: PatchField<Decimal>,
    #[serde(default)]
    pub rent_deposit: PatchField<Decimal>,
    #[serde(default)]
    pub property_fee: PatchField<Decimal>,
    #[serde(default)]
    pub latitude: PatchField<Decimal>,
    #[serde(default)]
    pub longitude: PatchField<Decimal>,
    #[serde(default)]
    pub status: PatchField<PropertyStatus>,
    #[serde(default)]
    pub lease_type: PatchField<LeaseType>,
    #[serde(default)]
    pub lease_term: PatchField<LeaseTerm>,
    #[serde(default)]
    pub available_date: PatchField<DateTime<Utc>>,
}

impl From<PatchPropertyRequest> for PropertyPatch {
    fn from(req: PatchPropertyRequest) -> Self {
        PropertyPatch {
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
            status: req.status,
            lease_type: req.lease_type,
            lease_term: req.lease_term,
            available_date: req.available_date,
            stamped_at: None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/properties/{id:\\d+}/update")]
pub async fn patch_property_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<PatchPropertyRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data.property.patch.execute(id, payload.into_inner().into()).await {
        Ok(outcome) => ApiResponse::success(outcome.summary()),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}
