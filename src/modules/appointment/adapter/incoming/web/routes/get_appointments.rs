use actix_web::{get, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[get("/api/appointments/{id:\\d+}")]
pub async fn get_appointment_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.appointment.get.get(path.into_inner()).await {
        Ok(appointment) => ApiResponse::success(appointment),
        Err(err) => guard_error_response(err, "APPOINTMENT_NOT_FOUND", "Appointment"),
    }
}

#[get("/api/appointments")]
pub async fn list_appointments_handler(data: web::Data<AppState>) -> impl Responder {
    match data.appointment.get.list().await {
        Ok(appointments) => ApiResponse::success(appointments),
        Err(err) => guard_error_response(err, "APPOINTMENT_NOT_FOUND", "Appointment"),
    }
}

#[get("/api/appointments/paged")]
pub async fn list_appointments_paged_handler(
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.appointment.get.list_paged(query.into_inner()).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => guard_error_response(err, "APPOINTMENT_NOT_FOUND", "Appointment"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{seeded_appointment, seeded_property, seeded_user};

    #[actix_web::test]
    async fn test_reads() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let tenant = store.insert_user(seeded_user("tenant01", "110101199001011234"));
        let property = store.insert_property(seeded_property("GZ-TH-001"));
        let first = store.insert_appointment(seeded_appointment(tenant.id, property.id));
        store.insert_appointment(seeded_appointment(tenant.id, property.id));

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(list_appointments_paged_handler)
                .service(get_appointment_handler)
                .service(list_appointments_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/appointments/{}", first.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["propertyId"], property.id);

        let req = test::TestRequest::get().uri("/api/appointments").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/appointments/paged?pageNumber=1&pageSize=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::get().uri("/api/appointments/404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
