use actix_web::{post, web, Responder};

use super::create_property::CreatePropertyRequest;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[post("/api/properties/batch")]
pub async fn batch_create_properties_handler(
    data: web::Data<AppState>,
    payload: web::Json<Vec<CreatePropertyRequest>>,
) -> impl Responder {
    let inputs = payload.into_inner().into_iter().map(Into::into).collect();

    match data.property.batch_create.execute(inputs).await {
        Ok(properties) => ApiResponse::created(properties),
        Err(err) => guard_error_response(err, "PROPERTY_NOT_FOUND", "Property"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    fn property_body(code: &str) -> Value {
        json!({
            "propertyName": "Lakeview 5A",
            "propertyCode": code,
            "address": "12 Tianhe East Road",
            "area": 45,
            "bedrooms": 1,
            "bathrooms": 1,
            "maxTenants": 2,
            "rentPrice": 2100,
            "rentDeposit": 2100,
            "propertyFee": 80,
            "latitude": 23.13,
            "longitude": 113.32,
            "leaseType": 1,
            "leaseTerm": 0
        })
    }

    async fn post(builder: TestAppStateBuilder, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(batch_create_properties_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/properties/batch")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_batch_creates_every_item() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();

        let (status, body) = post(
            builder,
            json!([property_body("LV-5A-01"), property_body("LV-5A-02")]),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(store.property_count(), 2);
    }

    #[actix_web::test]
    async fn test_batch_is_rejected_as_a_whole() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let mut bad = property_body("LV-5A-02");
        bad["propertyName"] = json!("  ");

        let (status, body) = post(builder, json!([property_body("LV-5A-01"), bad])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["details"][0]["field"], "items[1].propertyName");
        assert_eq!(store.property_count(), 0);
    }

    #[actix_web::test]
    async fn test_empty_batch_is_rejected() {
        let (status, body) = post(TestAppStateBuilder::default(), json!([])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["details"][0]["field"], "items");
    }
}
