use actix_web::{get, post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::property::application::domain::entities::{
    LeaseTerm, LeaseType, PropertyFilter, PropertyStatus,
};
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPropertiesRequest {
    pub keyword: Option<String>,
    pub status: Option<PropertyStatus>,
    pub lease_type: Option<LeaseType>,
    pub lease_term: Option<LeaseTerm>,
    pub region_id: Option<i32>,
    pub min_rent: Option<Decimal>,
    pub max_rent: Option<Decimal>,
    pub min_bedrooms: Option<i32>,
}

impl From<SearchPropertiesRequest> for PropertyFilter {
    fn from(req: SearchPropertiesRequest) -> Self {
        PropertyFilter {
            keyword: req.keyword,
            status: req.status,
            lease_type: req.lease_type,
            lease_term: req.lease_term,
            region_id: req.region_id,
            min_rent: req.min_rent,
            max_rent: req.max_rent,
            min_bedrooms: req.min_bedrooms,
        }
    }
}

#[get("/api/properties/{id:\\d+}")]
pub async fn get_property_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.get.get(path.into_inner()).await {
        Ok(property) => ApiResponse::success(property),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}

#[get("/api/properties")]
pub async fn list_properties_handler(data: web::Data<AppState>) -> impl Responder {
    match data.property.get.list().await {
        Ok(properties) => ApiResponse::success(properties),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}

#[get("/api/properties/paged")]
pub async fn list_properties_paged_handler(
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.get.list_paged(query.into_inner()).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}

#[post("/api/properties/search")]
pub async fn search_properties_handler(
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
    payload: web::Json<SearchPropertiesRequest>,
) -> impl Responder {
    match data
        .property
        .get
        .search(payload.into_inner().into(), query.into_inner())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}
