use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::appointment::application::domain::entities::NewAppointment;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub user_id: i32,
    pub property_id: i32,
    pub assigned_staff_id: Option<i32>,
    pub remarks: Option<String>,
    pub appointment_time: Option<DateTime<Utc>>,
    pub appointment_end_time: Option<DateTime<Utc>>,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(req: CreateAppointmentRequest) -> Self {
        NewAppointment {
            user_id: req.user_id,
            property_id: req.property_id,
            assigned_staff_id: req.assigned_staff_id,
            remarks: req.remarks,
            appointment_time: req.appointment_time,
            appointment_end_time: req.appointment_end_time,
        }
    }
}

#[post("/api/appointments")]
pub async fn create_appointment_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateAppointmentRequest>,
) -> impl Responder {
    match data.appointment.create.execute(payload.into_inner().into()).await {
        Ok(appointment) => ApiResponse::created(appointment),
        Err(err) => guard_error_response(err, "APPOINTMENT_NOT_FOUND", "Appointment"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{seeded_property, seeded_user};

    #[actix_web::test]
    async fn test_create_appointment() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let tenant = store.insert_user(seeded_user("tenant01", "110101199001011234"));
        let property = store.insert_property(seeded_property("GZ-TH-001"));
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(create_appointment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(json!({
                "userId": tenant.id,
                "propertyId": property.id,
                "remarks": "weekend viewing",
                "appointmentTime": "2026-11-07T02:00:00Z",
                "appointmentEndTime": "2026-11-07T03:00:00Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], 0);
        assert_eq!(body["data"]["remarks"], "weekend viewing");
        assert!(body["data"]["assignmentTime"].is_null());
    }

    #[actix_web::test]
    async fn test_missing_property_is_a_field_error() {
        let builder = TestAppStateBuilder::default();
        let tenant = builder
            .store()
            .insert_user(seeded_user("tenant01", "110101199001011234"));
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(create_appointment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(json!({ "userId": tenant.id, "propertyId": 999 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["details"][0]["field"], "propertyId");
    }
}
