use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SetUserStatusRequest {
    pub status: bool,
}

#[post("/api/users/{id:\\d+}/status")]
pub async fn set_user_status_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<SetUserStatusRequest>,
) -> impl Responder {
    match data
        .user
        .set_status
        .execute(path.into_inner(), payload.status)
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::seeded_user;

    #[actix_web::test]
    async fn test_set_status() {
        let builder = TestAppStateBuilder::default();
        let user = builder
            .store()
            .insert_user(seeded_user("alice01", "110101199001011234"));
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(set_user_status_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{}/status", user.id))
            .set_json(json!({ "status": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], true);

        let req = test::TestRequest::post()
            .uri("/api/users/999/status")
            .set_json(json!({ "status": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
