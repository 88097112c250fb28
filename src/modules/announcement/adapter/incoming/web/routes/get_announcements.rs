use actix_web::{get, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[get("/api/announcements/{id:\\d+}")]
pub async fn get_announcement_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.announcement.get.get(path.into_inner()).await {
        Ok(announcement) => ApiResponse::success(announcement),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}

#[get("/api/announcements")]
pub async fn list_announcements_handler(data: web::Data<AppState>) -> impl Responder {
    match data.announcement.get.list().await {
        Ok(announcements) => ApiResponse::success(announcements),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}

#[get("/api/announcements/deleted")]
pub async fn list_deleted_announcements_handler(data: web::Data<AppState>) -> impl Responder {
    match data.announcement.get.list_deleted().await {
        Ok(announcements) => ApiResponse::success(announcements),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::announcement::application::domain::entities::Announcement;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::seeded_announcement;

    #[actix_web::test]
    async fn test_reads() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let live = store.insert_announcement(seeded_announcement("Lift maintenance"));
        store.insert_announcement(Announcement {
            is_deleted: true,
            ..seeded_announcement("Old notice")
        });

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(list_deleted_announcements_handler)
                .service(get_announcement_handler)
                .service(list_announcements_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/announcements/{}", live.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "Lift maintenance");

        let req = test::TestRequest::get().uri("/api/announcements").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/announcements/deleted")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["title"], "Old notice");

        let req = test::TestRequest::get()
            .uri("/api/announcements/999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
